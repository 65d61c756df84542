//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::component::ListComponent;
use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::pagination::PageNumber;
use crate::render::Node;
use std::process::ExitCode;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// A failed fetch is rendered like any other state and reported through
    /// the exit code; only setup problems come back as `Err`.
    pub async fn run(&self) -> Result<ExitCode> {
        let config = self.load_config()?;
        let mut stdout = tokio::io::stdout();

        let loaded = match &self.cli.command {
            Commands::Show { page } => self.show(&config, *page, &mut stdout).await?,
            Commands::Browse => {
                let stdin = BufReader::new(tokio::io::stdin());
                self.browse(&config, stdin, &mut stdout).await?
            }
        };

        Ok(if loaded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    /// Resolve the config file and command-line overrides
    pub fn load_config(&self) -> Result<PagerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => PagerConfig::load(path)?,
            None => PagerConfig::default(),
        };

        if let Some(endpoint) = &self.cli.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(page_size) = self.cli.page_size {
            config = config.with_page_size(page_size);
        }

        config.validate()?;
        Ok(config)
    }

    /// Print a single page once the fetch settles
    ///
    /// Returns whether the users loaded.
    pub async fn show<W>(
        &self,
        config: &PagerConfig,
        page: PageNumber,
        out: &mut W,
    ) -> Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        let mut component = ListComponent::mount_http(config)?;
        let status = component.settled().await?;
        component.click(page);
        self.emit(&component.render(), out).await?;
        Ok(status.records().is_some())
    }

    /// Render, then re-render for every page number read from `input`
    pub async fn browse<R, W>(
        &self,
        config: &PagerConfig,
        input: R,
        out: &mut W,
    ) -> Result<bool>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut component = ListComponent::mount_http(config)?;
        self.emit(&component.render(), out).await?;

        let status = component.settled().await?;
        self.emit(&component.render(), out).await?;
        if status.records().is_none() {
            return Ok(false);
        }

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "q" | "quit" | "exit") {
                break;
            }

            match line.parse::<PageNumber>() {
                Ok(page) => {
                    component.click(page);
                    self.emit(&component.render(), out).await?;
                }
                Err(_) => {
                    let message = format!("Not a page number: {line}\n");
                    out.write_all(message.as_bytes()).await?;
                    out.flush().await?;
                }
            }
        }

        component.unmount();
        Ok(true)
    }

    /// Write a rendered view in the selected format
    async fn emit<W>(&self, view: &Node, out: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut rendered = format_view(view, self.cli.format)?;
        rendered.push('\n');
        out.write_all(rendered.as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}

/// Format a view for output
pub fn format_view(view: &Node, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(view.to_string()),
        OutputFormat::Html => Ok(view.to_html()),
        OutputFormat::Json => {
            serde_json::to_string(view)
                .map_err(|e| Error::Other(format!("Failed to encode view: {e}")))
        }
    }
}
