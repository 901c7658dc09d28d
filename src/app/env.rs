use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub llm_base_url: String,
    pub llm_api_key: String,
    pub llm_scene_id: Option<String>,

    pub garment_dir: String,

    pub stream_timeout_secs: Option<u64>,
}
