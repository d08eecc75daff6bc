/// Host capability that delivers per-frame ticks to the watcher.
///
/// While subscribed, the host calls [`super::ActorWatcher::on_tick`] once
/// per frame on the thread that owns the watcher.
pub trait TickSubscription {
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
}
