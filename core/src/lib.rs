pub mod dhcp;
pub mod discovery;
pub mod gateway;
pub mod scanner;
pub mod system;
pub mod template;

mod process;
