use crate::connection_settings::ConnectionSettings;

#[derive(Debug)]
pub struct GetGroupOffsetsQuery {
    pub connection_settings: ConnectionSettings,
    pub group: String,
    pub topic: String,
}
