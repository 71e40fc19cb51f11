pub mod session;

pub use session::ExplorerSession;
