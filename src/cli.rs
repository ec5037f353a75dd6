use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "voxctl", about = "Client for a local speech-synthesis server")]
pub struct Cli {
    /// Path to a YAML or JSON config file
    #[arg(long, global = true, env = "VOXCTL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the voices available on the speech server
    Speakers,

    /// Synthesize text to an audio file
    Say {
        /// Text to synthesize
        text: String,

        /// Voice name; must exist in the server's speaker directory
        #[arg(long)]
        speaker: Option<String>,

        /// Audio format tag understood by the server (default: opus)
        #[arg(long)]
        format: Option<String>,

        /// Output file, overwritten if it exists
        #[arg(long, default_value = "output.ogg")]
        output: PathBuf,
    },

    /// Send Wi-Fi credentials to the companion device
    Wifi {
        /// Network/profile identifier
        #[arg(long)]
        uuid: String,

        /// Network password
        #[arg(long, env = "VOXCTL_WIFI_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Count tokens in a prompt with a pretrained tokenizer
    Tokens {
        /// Prompt to tokenize
        prompt: String,

        /// Tokenizer model name on the hub
        #[arg(long)]
        model: Option<String>,
    },
}
