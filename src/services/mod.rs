pub mod activity_signup_service;
