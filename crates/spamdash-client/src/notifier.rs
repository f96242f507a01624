use spamdash_core::Notification;

/// Receives the transient messages the controller raises. How (and for how
/// long) they are shown is up to the front end.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
