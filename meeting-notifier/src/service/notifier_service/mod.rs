mod dto;
mod notifier_service;
mod notifier_service_impl;

pub use dto::{DeliveryFailure, DeliveryOutcome, DeliverySummary, NotificationPayload};
pub use notifier_service::*;
pub use notifier_service_impl::*;
