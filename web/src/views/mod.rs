mod about_us;
pub use about_us::AboutUs;

mod review;
pub use review::Review;

mod admin;
pub use admin::Admin;

mod delete_email;
pub use delete_email::DeleteEmail;

pub(crate) fn make_client() -> api::ApiClient {
    api::ApiClient::new()
}
