use falcon_risk::{FlightRiskInput, RiskAssessment, RiskEngine};

use crate::client::PredictionClient;

pub const SIMULATED_NOTICE: &str = "Using simulated prediction (API unavailable)";

#[derive(Debug)]
pub struct Prediction {
    pub assessment: RiskAssessment,
    /// Set when the API call failed and the local heuristic produced the result.
    pub simulated: bool,
}

/// Ask the API; on any transport or status failure score locally instead.
pub async fn predict_or_simulate(
    client: &PredictionClient,
    engine: &RiskEngine,
    input: &FlightRiskInput,
) -> Prediction {
    match client.predict(input).await {
        Ok(assessment) => Prediction {
            assessment,
            simulated: false,
        },
        Err(e) => {
            tracing::warn!(error = %e, "prediction API unavailable; simulating locally");
            Prediction {
                assessment: engine.assess(input),
                simulated: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use falcon_risk::{FixedBase, RiskConfig, RiskLevel};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn engine() -> RiskEngine {
        RiskEngine::new(RiskConfig::default(), Box::new(FixedBase(0.3)))
    }

    fn client(base_url: String) -> PredictionClient {
        PredictionClient::new(ClientConfig {
            base_url,
            timeout_secs: 2,
        })
        .unwrap()
    }

    fn stormy() -> FlightRiskInput {
        FlightRiskInput {
            origin_code: Some("SFO".to_string()),
            dest_code: Some("DEN".to_string()),
            wind_speed: Some(30.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn server_error_falls_back_to_local_score() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict-delay"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let prediction =
            predict_or_simulate(&client(format!("{}/api", server.uri())), &engine(), &stormy())
                .await;

        assert!(prediction.simulated);
        assert_eq!(prediction.assessment.risk_score, 40);
        assert_eq!(prediction.assessment.risk_level, RiskLevel::Medium);
        assert_eq!(prediction.assessment.flight_info.route, "SFO → DEN");
    }

    #[tokio::test]
    async fn unreachable_api_falls_back() {
        // nothing listens on the discard port locally
        let prediction =
            predict_or_simulate(&client("http://127.0.0.1:9/api".to_string()), &engine(), &stormy())
                .await;
        assert!(prediction.simulated);
        assert!(!prediction.assessment.recommendations.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict-delay"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let prediction =
            predict_or_simulate(&client(format!("{}/api", server.uri())), &engine(), &stormy())
                .await;
        assert!(prediction.simulated);
    }

    #[tokio::test]
    async fn successful_call_is_not_simulated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict-delay"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "delayProbability": 0.9,
                "riskScore": 90,
                "riskLevel": "High",
                "flightInfo": {
                    "airline": "UA",
                    "route": "SFO → DEN",
                    "departureTime": "2024-07-15T08:00",
                    "dayOfWeek": "Monday",
                    "month": "July"
                },
                "recommendations": []
            })))
            .mount(&server)
            .await;

        let prediction =
            predict_or_simulate(&client(format!("{}/api", server.uri())), &engine(), &stormy())
                .await;
        assert!(!prediction.simulated);
        assert_eq!(prediction.assessment.risk_score, 90);
    }
}
