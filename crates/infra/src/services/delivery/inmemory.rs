use super::IDeliveryChannel;
use pashumitra_scheduler_domain::{InjectionReminder, ID};
use std::collections::HashSet;
use std::sync::Mutex;

/// Records delivered reminders instead of sending them. Deliveries for
/// subjects marked with `fail_for` are refused.
pub struct InMemoryDeliveryChannel {
    delivered: Mutex<Vec<InjectionReminder>>,
    failing_subjects: Mutex<HashSet<ID>>,
}

impl InMemoryDeliveryChannel {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            failing_subjects: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail_for(&self, subject_id: &ID) {
        let mut failing = self.failing_subjects.lock().unwrap();
        failing.insert(subject_id.clone());
    }

    pub fn recover(&self, subject_id: &ID) {
        let mut failing = self.failing_subjects.lock().unwrap();
        failing.remove(subject_id);
    }

    pub fn delivered(&self) -> Vec<InjectionReminder> {
        self.delivered.lock().unwrap().clone()
    }
}

impl Default for InMemoryDeliveryChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IDeliveryChannel for InMemoryDeliveryChannel {
    async fn send(&self, reminder: &InjectionReminder) -> anyhow::Result<()> {
        if self
            .failing_subjects
            .lock()
            .unwrap()
            .contains(&reminder.subject_id)
        {
            return Err(anyhow::Error::msg(format!(
                "Delivery refused for subject: {}",
                reminder.subject_id
            )));
        }
        self.delivered.lock().unwrap().push(reminder.clone());
        Ok(())
    }
}
