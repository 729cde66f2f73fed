pub mod dispatcher;
pub mod profile;
pub mod state;


pub use dispatcher::*;
pub use profile::*;
pub use state::*;
