pub mod call;
pub mod cronjobs;
pub mod nav;
pub mod search;
