mod event;
mod user;
