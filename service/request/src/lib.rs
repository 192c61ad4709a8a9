mod request;

pub use request::RequestServiceImpl;
