use std::sync::Arc;

use common::config::Config;
use metadata::MetadataProvider;

use crate::auth;
use crate::events::Events;
use crate::users::Users;
use crate::webhook::Verifier;
use crate::webhook::Webhooks;
use crate::Result;

pub struct PlatformProvider {
    pub users: Arc<Users>,
    pub events: Arc<Events>,
    pub webhooks: Arc<Webhooks>,
    pub auth: auth::Config,
}

impl PlatformProvider {
    pub fn try_new(md: Arc<MetadataProvider>, cfg: Config) -> Result<Self> {
        let verifier = Verifier::new(&cfg.webhook.secret)?;

        Ok(Self {
            users: Arc::new(Users::new(md.users.clone(), md.events.clone())),
            events: Arc::new(Events::new(md.events.clone())),
            webhooks: Arc::new(Webhooks::new(verifier, md.users.clone())),
            auth: auth::Config {
                session_token_key: cfg.auth.session_token_key,
            },
        })
    }
}
