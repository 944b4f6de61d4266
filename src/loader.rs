use crate::config::{LoaderConfig, TokenPolicy};
use crate::context::{AuthToken, HostContext, PageQuery};
use crate::errors::LoadError;
use crate::models::{HttpResponse, ProgramResponse, RequestKind};
use crate::render::RenderTarget;
use crate::transport::Transport;
use tracing::{error, info, warn};
use url::Url;

pub type Outcome = Result<String, LoadError>;

/// Loads the program text for one page view and renders it into the target.
pub struct ProgramLoader<T, R> {
    config: LoaderConfig,
    host: HostContext,
    query: PageQuery,
    transport: T,
    target: R,
}

impl<T: Transport, R: RenderTarget> ProgramLoader<T, R> {
    pub fn new(
        config: LoaderConfig,
        host: HostContext,
        query: PageQuery,
        transport: T,
        target: R,
    ) -> Self {
        Self {
            config,
            host,
            query,
            transport,
            target,
        }
    }

    /// Runs the load once. The target is written exactly once, whatever the outcome.
    pub async fn run(mut self) -> Outcome {
        let outcome = self.load().await;
        match &outcome {
            Ok(text) => self.target.set_text(text),
            Err(err) => self.target.set_text(err.message()),
        }
        outcome
    }

    async fn load(&self) -> Outcome {
        let Some(token) = self.resolve_token() else {
            warn!("no init data available, not calling the api");
            return Err(LoadError::MissingContext);
        };

        let kind = self.query.kind;
        let url = request_url(&self.config.api_base, kind, token)?;
        info!(endpoint = kind.path(), token_len = token.len(), "loading program");

        let response = self.transport.get(&url).await.map_err(|err| {
            error!("request failed: {err}");
            LoadError::from(err)
        })?;
        info!(status = response.status, "api responded");

        interpret(response)
    }

    fn resolve_token(&self) -> Option<&AuthToken> {
        match self.config.token_policy {
            TokenPolicy::HostOnly => self.host.init_data.as_ref(),
            TokenPolicy::QueryFallback => self
                .host
                .init_data
                .as_ref()
                .or(self.query.init_data.as_ref()),
        }
    }
}

/// Joins the endpoint path onto the api base and appends the form-encoded token.
pub fn request_url(base: &Url, kind: RequestKind, token: &AuthToken) -> Result<Url, LoadError> {
    let mut url = base
        .join(kind.path())
        .map_err(|err| LoadError::ServerFailure(format!("bad request url: {err}")))?;
    url.query_pairs_mut().append_pair("init_data", token.as_str());
    Ok(url)
}

pub fn interpret(response: HttpResponse) -> Outcome {
    match response.status {
        403 => {
            error!(body = %response.body, "unauthorized");
            Err(LoadError::Unauthorized)
        }
        404 => Err(LoadError::NotFound),
        status if status >= 500 => {
            error!(status, body = %response.body, "server error");
            Err(LoadError::ServerFailure(format!("status {status}")))
        }
        _ => match serde_json::from_str::<ProgramResponse>(&response.body) {
            Ok(payload) => Ok(payload.into_text()),
            Err(err) => {
                error!("failed to parse program response: {err}");
                Err(LoadError::ServerFailure(err.to_string()))
            }
        },
    }
}
