use anyhow::Result;

pub mod generate;
pub mod generate_verify;

pub trait Command {
    fn run(&self) -> Result<()>;
}
