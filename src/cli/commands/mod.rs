mod init;
mod seed;

pub use init::cmd_init;
pub use seed::cmd_seed;
