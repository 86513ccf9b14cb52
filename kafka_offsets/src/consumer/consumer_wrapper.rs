use std::ops::{Deref, DerefMut};

use anyhow::Context;
use rdkafka::consumer::StreamConsumer;
use rdkafka::ClientConfig;

use crate::connection_settings::ConnectionSettings;

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    pub fn create(connection_settings: &ConnectionSettings) -> Result<Self, anyhow::Error> {
        let consumer: StreamConsumer = ClientConfig::try_from(connection_settings)?
            .create()
            .context("While creating a Kafka consumer")?;

        Ok(Self { consumer })
    }

    /// The committed-offsets lookup only works on a consumer that carries the
    /// group id it asks about.
    pub fn create_for_group(
        connection_settings: &ConnectionSettings,
        group: &str,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(connection_settings)?;
        config.set("group.id", group);

        let consumer: StreamConsumer = config
            .create()
            .context("While creating a Kafka consumer")?;

        Ok(Self { consumer })
    }
}

impl DerefMut for ConsumerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.consumer
    }
}

impl Deref for ConsumerWrapper {
    type Target = StreamConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}
