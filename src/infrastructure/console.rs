use async_trait::async_trait;
use std::error::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt, Stderr, Stdin, Stdout, stderr, stdin, stdout};

#[async_trait]
pub trait Console {
    async fn read_stdin(&mut self, buffer: &mut String) -> Result<(), Box<dyn Error>>;
    async fn write_stdout(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>>;
    async fn write_stderr(&mut self, buffer: &[u8]) -> Result<(), Box<dyn Error>>;
}

#[derive(Debug)]
pub struct OsConsole {
    stdin: Stdin,
    stdout: Stdout,
    stderr: Stderr,
}

impl OsConsole {
    pub fn new() -> Self {
        Self {
            stdin: stdin(),
            stdout: stdout(),
            stderr: stderr(),
        }
    }
}

#[async_trait]
impl Console for OsConsole {
    async fn read_stdin(&mut self, buffer: &mut String) -> Result<(), Box<dyn Error>> {
        self.stdin.read_to_string(buffer).await?;

        Ok(())
    }

    async fn write_stdout(&mut self, src: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stdout.write_all(src).await?;
        self.stdout.flush().await?;

        Ok(())
    }

    async fn write_stderr(&mut self, src: &[u8]) -> Result<(), Box<dyn Error>> {
        self.stderr.write_all(src).await?;
        self.stderr.flush().await?;

        Ok(())
    }
}
