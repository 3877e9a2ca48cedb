use std::sync::Arc;

use folio_api_rest::RestServer;
use folio_config::Config;
use folio_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};

pub fn contact_service(config: &Config) -> ContactServiceImpl {
    ContactServiceImpl::new(ContactServiceConfig {
        recipient: Arc::new(config.contact.recipient.clone()),
    })
}

pub fn rest_server(config: &Config) -> RestServer<ContactServiceImpl> {
    RestServer::new(contact_service(config))
}
