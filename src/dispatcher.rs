//! Cliente de la API de recomendaciones de ahorro de energía.
//!
//! API pública (una operación por capacidad remota):
//!   - `fetch_all_recommendations()`        -> GET /recommendations
//!   - `fetch_recommendation_by_id(id)`     -> GET /recommendations/{id}
//!   - `fetch_by_appliance(nombre)`         -> GET /recommendations/Electro_Domestico/?Electro_Domestico=...
//!   - `chatbot_search(pregunta)`           -> GET /chatbot?query=...
//!
//! Ninguna operación devuelve `Err`: los fallos de validación, de transporte
//! o HTTP acaban como `QueryResult::Error`.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::AppConfig,
    models::{ErrorResult, QueryResult, MSG_EMPTY_APPLIANCE, MSG_EMPTY_QUESTION, MSG_INVALID_ID},
};

const RECOMMENDATIONS_PATH: &str = "recommendations";
const APPLIANCE_PATH: &str = "Electro_Domestico";
const APPLIANCE_PARAM: &str = "Electro_Domestico";
const CHATBOT_PATH: &str = "chatbot";
const CHATBOT_PARAM: &str = "query";

#[derive(Debug, Clone)]
pub struct RecommendationsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RecommendationsClient {
    /// Sin timeout ni reintentos: una petición colgada no se resuelve nunca.
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Error creando el cliente HTTP")?;
        Ok(Self { http, base_url })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        Self::new(cfg.base_url.clone())
    }

    pub async fn fetch_all_recommendations(&self) -> QueryResult {
        self.dispatch(self.endpoint(&[RECOMMENDATIONS_PATH], None))
            .await
    }

    pub async fn fetch_recommendation_by_id(&self, id: &str) -> QueryResult {
        let id = id.trim();
        if id.is_empty() {
            warn!("Búsqueda por ID sin ID; no se envía la petición.");
            return ErrorResult::new(MSG_INVALID_ID).into();
        }
        self.dispatch(self.endpoint(&[RECOMMENDATIONS_PATH, id], None))
            .await
    }

    pub async fn fetch_by_appliance(&self, name: &str) -> QueryResult {
        let name = name.trim();
        if name.is_empty() {
            warn!("Búsqueda por electrodoméstico sin nombre; no se envía la petición.");
            return ErrorResult::new(MSG_EMPTY_APPLIANCE).into();
        }
        // El segmento vacío deja la barra final que espera la API.
        self.dispatch(self.endpoint(
            &[RECOMMENDATIONS_PATH, APPLIANCE_PATH, ""],
            Some((APPLIANCE_PARAM, name)),
        ))
        .await
    }

    pub async fn chatbot_search(&self, question: &str) -> QueryResult {
        let question = question.trim();
        if question.is_empty() {
            warn!("Pregunta vacía para el chatbot; no se envía la petición.");
            return ErrorResult::new(MSG_EMPTY_QUESTION).into();
        }
        self.dispatch(self.endpoint(&[CHATBOT_PATH], Some((CHATBOT_PARAM, question))))
            .await
    }

    /// Construye `${base}/<segmentos>[?clave=valor]` codificando cada parte.
    fn endpoint(&self, segments: &[&str], query: Option<(&str, &str)>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("La URL base no admite rutas: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn dispatch(&self, url: Result<Url>) -> QueryResult {
        let outcome = match url {
            Ok(url) => self.get_json(url).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(payload) => {
                let result = QueryResult::from_payload(payload);
                debug!("Respuesta clasificada: {:?}", result);
                result
            }
            Err(e) => {
                warn!("Petición fallida: {e:#}");
                ErrorResult::new(format!("{e:#}")).into()
            }
        }
    }

    async fn get_json(&self, url: Url) -> Result<Value> {
        info!("GET {url}");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("No se pudo contactar con {url}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!(ErrorResult::http_status(status.as_u16()).error));
        }

        let payload = response
            .json::<Value>()
            .await
            .context("La respuesta no es JSON válido")?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> RecommendationsClient {
        RecommendationsClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn endpoints_are_built_under_the_base_path() {
        let c = client("http://127.0.0.1:8000");
        assert_eq!(
            c.endpoint(&[RECOMMENDATIONS_PATH], None).unwrap().as_str(),
            "http://127.0.0.1:8000/recommendations"
        );

        let c = client("http://api.local/v1/");
        assert_eq!(
            c.endpoint(&[CHATBOT_PATH], Some((CHATBOT_PARAM, "hola"))).unwrap().as_str(),
            "http://api.local/v1/chatbot?query=hola"
        );
    }

    #[test]
    fn untrusted_values_are_encoded() {
        let c = client("http://127.0.0.1:8000");
        let by_id = c.endpoint(&[RECOMMENDATIONS_PATH, "1/../2 x"], None).unwrap();
        assert_eq!(by_id.path(), "/recommendations/1%2F..%2F2%20x");

        let by_name = c
            .endpoint(
                &[RECOMMENDATIONS_PATH, APPLIANCE_PATH, ""],
                Some((APPLIANCE_PARAM, "aire acondicionado&x=1")),
            )
            .unwrap();
        assert_eq!(by_name.path(), "/recommendations/Electro_Domestico/");
        let pairs: Vec<(String, String)> = by_name.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![(APPLIANCE_PARAM.to_string(), "aire acondicionado&x=1".to_string())]
        );
    }

    #[test]
    fn blank_inputs_short_circuit_without_network() {
        // Puerto 9 (discard): si se enviara algo, el resultado sería otro error.
        let c = client("http://127.0.0.1:9");
        let by_id = tokio_test::block_on(c.fetch_recommendation_by_id(""));
        assert_eq!(by_id, QueryResult::Error(ErrorResult::new(MSG_INVALID_ID)));

        let by_name = tokio_test::block_on(c.fetch_by_appliance("   "));
        assert_eq!(by_name, QueryResult::Error(ErrorResult::new(MSG_EMPTY_APPLIANCE)));

        let chatbot = tokio_test::block_on(c.chatbot_search("\t"));
        assert_eq!(chatbot, QueryResult::Error(ErrorResult::new(MSG_EMPTY_QUESTION)));
    }
}
