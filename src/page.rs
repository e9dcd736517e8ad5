use crate::models::{Region, Rendered};
use serde::Serialize;

/// Current content of every output region of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub submit_response: String,
    pub update_confirmation: String,
    pub view: String,
    pub server_status: String,
}

impl Page {
    pub fn apply(&mut self, rendered: Rendered) {
        *self.slot_mut(rendered.region) = rendered.html;
    }

    pub fn get(&self, region: Region) -> &str {
        match region {
            Region::SubmitResponse => &self.submit_response,
            Region::UpdateConfirmation => &self.update_confirmation,
            Region::View => &self.view,
            Region::ServerStatus => &self.server_status,
        }
    }

    fn slot_mut(&mut self, region: Region) -> &mut String {
        match region {
            Region::SubmitResponse => &mut self.submit_response,
            Region::UpdateConfirmation => &mut self.update_confirmation,
            Region::View => &mut self.view,
            Region::ServerStatus => &mut self.server_status,
        }
    }
}
