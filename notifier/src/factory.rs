//! Factory mapping notification tags to channel strategies

use shared::Registry;

use crate::channels::{EmailChannel, PushChannel, SmsChannel};
use crate::error::NotifierResult;
use crate::traits::NotificationStrategy;

/// Resolves a notification tag to a fresh strategy instance
///
/// The built-in tags are `email`, `sms` and `push`; callers extend the set
/// through [`register`](NotificationFactory::register) rather than by
/// touching dispatch code.
pub struct NotificationFactory {
    registry: Registry<dyn NotificationStrategy>,
}

impl NotificationFactory {
    pub fn new() -> Self {
        let mut registry: Registry<dyn NotificationStrategy> = Registry::new("notification");
        registry.register("email", || Box::new(EmailChannel));
        registry.register("sms", || Box::new(SmsChannel));
        registry.register("push", || Box::new(PushChannel));
        Self { registry }
    }

    pub fn create(&self, tag: &str) -> NotifierResult<Box<dyn NotificationStrategy>> {
        Ok(self.registry.create(tag)?)
    }

    /// Register an additional channel under `tag`
    pub fn register<F>(&mut self, tag: &'static str, ctor: F)
    where
        F: Fn() -> Box<dyn NotificationStrategy> + Send + Sync + 'static,
    {
        self.registry.register(tag, ctor);
    }

    pub fn supported_tags(&self) -> Vec<&'static str> {
        self.registry.tags()
    }
}

impl Default for NotificationFactory {
    fn default() -> Self {
        Self::new()
    }
}
