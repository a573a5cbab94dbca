pub mod event_watcher;
