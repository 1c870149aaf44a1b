use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::render::RenderSettings;

/// The whole input document: network description, queries to answer, and
/// map styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
    #[serde(default)]
    pub render_settings: RenderSettings,
}

/// One entry of the `base_requests` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Forward road distance in meters to each named neighboring stop.
    #[serde(default)]
    pub road_distances: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusRequest {
    pub name: String,
    /// For a roundtrip the last name duplicates the first.
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// One entry of the `stat_requests` array. The id is opaque and echoed back
/// verbatim in the answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
}
