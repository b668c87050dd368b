use anyhow::Result;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    dispatcher::RecommendationsClient,
    models::QueryResult,
    mount::ResultsMount,
    render::Renderer,
};

/// Una acción del usuario con su texto de entrada sin procesar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AllRecommendations,
    ById(String),
    ByAppliance(String),
    Chatbot(String),
}

/// Une el cliente y el renderizador: cada acción lanza como mucho una
/// petición y termina siempre con algo visible en el montaje.
#[derive(Debug, Clone)]
pub struct Panel {
    client: RecommendationsClient,
    renderer: Renderer,
}

impl Panel {
    pub fn new(client: RecommendationsClient, renderer: Renderer) -> Self {
        Self { client, renderer }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            RecommendationsClient::from_config(cfg)?,
            Renderer::from_config(cfg),
        ))
    }

    pub async fn dispatch(&self, action: &Action) -> QueryResult {
        match action {
            Action::AllRecommendations => self.client.fetch_all_recommendations().await,
            Action::ById(id) => self.client.fetch_recommendation_by_id(id).await,
            Action::ByAppliance(name) => self.client.fetch_by_appliance(name).await,
            Action::Chatbot(question) => self.client.chatbot_search(question).await,
        }
    }

    pub async fn run<M>(&self, action: &Action, mount: &mut M) -> QueryResult
    where
        M: ResultsMount + ?Sized,
    {
        info!("Acción: {:?}", action);
        let result = self.dispatch(action).await;
        if let QueryResult::Error(err) = &result {
            warn!("Se mostrará un error: {}", err.error);
        }
        self.renderer.render(&result, mount).await;
        result
    }
}
