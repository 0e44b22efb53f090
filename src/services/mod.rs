pub mod crud_service;

pub use crud_service::*;

use actix_web::web;
use std::sync::Arc;

use crate::database::MongoDB;
use crate::models::{News, Reminder, UserProfile};
use crate::store::{MemoryStore, MongoStore};

pub type NewsService = CrudService<News>;
pub type ReminderService = CrudService<Reminder>;
pub type UserProfileService = CrudService<UserProfile>;

/// The three entity services, built once by `main` and shared by all workers.
#[derive(Clone)]
pub struct Services {
    pub news: NewsService,
    pub reminders: ReminderService,
    pub users: UserProfileService,
}

impl Services {
    pub fn mongo(db: &MongoDB) -> Self {
        Self {
            news: CrudService::new(Arc::new(MongoStore::<News>::new(db))),
            reminders: CrudService::new(Arc::new(MongoStore::<Reminder>::new(db))),
            users: CrudService::new(Arc::new(MongoStore::<UserProfile>::new(db))),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            news: CrudService::new(Arc::new(MemoryStore::<News>::new())),
            reminders: CrudService::new(Arc::new(MemoryStore::<Reminder>::new())),
            users: CrudService::new(Arc::new(MemoryStore::<UserProfile>::new())),
        }
    }

    /// Registers each service as application data for the handlers.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.news.clone()))
            .app_data(web::Data::new(self.reminders.clone()))
            .app_data(web::Data::new(self.users.clone()));
    }
}
