use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{
    Region, Rendered, UpdateOutcome, UpdateReading, ViewRequest, WaterReading, WaterReport,
};
use crate::render;
use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("water_client/", env!("CARGO_PKG_VERSION"));

pub const ADD_WATER: &str = "/add_water";
pub const UPDATE_WATER: &str = "/update_water";
pub const VIEW_WATER: &str = "/view_water";
pub const PERCENTAGE: &str = "/percentage";
pub const VIEW_WATER_ID: &str = "/view_water_id";
pub const SERVER_STATUS: &str = "/";

/// Client for the water intake server.
///
/// The `add_water`..`server_status` methods are the typed request layer and
/// report failures as [`ClientError`]. The user-facing operations
/// (`submit_reading`, `update_reading`, ...) never fail: every error becomes
/// the failure message of the region the operation renders into.
#[derive(Debug, Clone)]
pub struct WaterClient {
    http: Client,
    config: ClientConfig,
}

impl WaterClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn add_water(&self, reading: &WaterReading) -> Result<WaterReport, ClientError> {
        let request = self.http.post(self.config.endpoint(ADD_WATER)).json(reading);
        let response = send(request).await?;
        response.json::<WaterReport>().await.map_err(body_error)
    }

    pub async fn update_water(&self, update: &UpdateReading) -> Result<String, ClientError> {
        let request = self.http.post(self.config.endpoint(UPDATE_WATER)).json(update);
        read_text(send(request).await?).await
    }

    pub async fn view_water(&self) -> Result<String, ClientError> {
        self.get_text(VIEW_WATER).await
    }

    pub async fn percentage(&self) -> Result<String, ClientError> {
        self.get_text(PERCENTAGE).await
    }

    pub async fn view_water_id(&self, view: &ViewRequest) -> Result<String, ClientError> {
        let request = self.http.post(self.config.endpoint(VIEW_WATER_ID)).json(view);
        read_text(send(request).await?).await
    }

    pub async fn server_status(&self) -> Result<String, ClientError> {
        self.get_text(SERVER_STATUS).await
    }

    pub async fn submit_reading(&self, water_intake: &str, target: &str) -> Rendered {
        let outcome = self.try_submit(water_intake, target).await;
        settle(Region::SubmitResponse, "submit_reading", outcome)
    }

    pub async fn update_reading(&self, water_intake: &str) -> Rendered {
        let outcome = self.try_update(water_intake).await;
        settle(Region::UpdateConfirmation, "update_reading", outcome)
    }

    pub async fn view_latest(&self) -> Rendered {
        let outcome = self.view_water().await.map(|body| render::text(&body));
        settle(Region::View, "view_latest", outcome)
    }

    pub async fn view_percentage(&self) -> Rendered {
        let outcome = self.percentage().await.map(|body| render::text(&body));
        settle(Region::View, "view_percentage", outcome)
    }

    pub async fn view_reading_by_id(&self, id: &str) -> Rendered {
        let outcome = self.try_view_by_id(id).await;
        settle(Region::View, "view_reading_by_id", outcome)
    }

    pub async fn check_server(&self) -> Rendered {
        let outcome = self.server_status().await.map(|body| render::text(body.trim_end()));
        settle(Region::ServerStatus, "check_server", outcome)
    }

    async fn try_submit(&self, water_intake: &str, target: &str) -> Result<String, ClientError> {
        let reading = WaterReading::parse(water_intake, target)?;
        info!(
            "sending reading: water_intake={} target={}",
            reading.water_intake, reading.target
        );

        let report = self.add_water(&reading).await?;
        debug!("server response: {report:?}");
        Ok(render::report(&report))
    }

    async fn try_update(&self, water_intake: &str) -> Result<String, ClientError> {
        let update = UpdateReading::parse(water_intake)?;
        info!("updating water intake by {}", update.water_intake);

        let body = self.update_water(&update).await?;
        debug!("update response: {body}");
        let outcome = UpdateOutcome::parse(&body);
        Ok(render::update_confirmation(update.water_intake, outcome.as_ref()))
    }

    async fn try_view_by_id(&self, id: &str) -> Result<String, ClientError> {
        let view = ViewRequest::parse(id)?;
        info!("fetching reading {}", view.id);

        let body = self.view_water_id(&view).await?;
        Ok(render::text(&body))
    }

    async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        let response = send(self.http.get(self.config.endpoint(path))).await?;
        read_text(response).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    let response = request.send().await.map_err(ClientError::Network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Http { status });
    }
    Ok(response)
}

async fn read_text(response: Response) -> Result<String, ClientError> {
    response.text().await.map_err(body_error)
}

fn body_error(err: reqwest::Error) -> ClientError {
    if err.is_decode() {
        ClientError::Decode(err)
    } else {
        ClientError::Network(err)
    }
}

fn settle(region: Region, operation: &str, outcome: Result<String, ClientError>) -> Rendered {
    match outcome {
        Ok(html) => Rendered::new(region, html),
        Err(err) => {
            if err.is_invalid_input() {
                info!("{operation} rejected input: {err}");
            } else {
                error!("{operation} failed: {err}");
            }
            Rendered::new(region, render::failure(region, &err))
        }
    }
}
