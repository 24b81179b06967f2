// src/cli/args.rs
use crate::domain::{PromptDraft, PromptId};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// API base URL (overrides PROMPT_ADMIN_API_BASE_URL and the config file)
    #[arg(short = 'u', long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, add, edit, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all prompts
    List {
        /// Output prompts as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create a new prompt (every field is required)
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit an existing prompt; fields not given keep their current value
    Edit {
        /// Prompt ID to edit
        #[arg(value_name = "PROMPT_ID")]
        prompt_id: PromptId,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a prompt
    Delete {
        /// Prompt ID to delete
        #[arg(value_name = "PROMPT_ID")]
        prompt_id: PromptId,
    },
}

/// The prompt form
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    /// Title
    #[arg(long)]
    pub title: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Image URL
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Type
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Attention note
    #[arg(long)]
    pub attention_note: Option<String>,

    /// Example question
    #[arg(long)]
    pub example_question: Option<String>,

    /// Example answer
    #[arg(long)]
    pub example_answer: Option<String>,
}

impl From<FieldArgs> for PromptDraft {
    fn from(args: FieldArgs) -> Self {
        PromptDraft {
            title: args.title,
            description: args.description,
            image_url: args.image_url,
            kind: args.kind,
            attention_note: args.attention_note,
            example_question: args.example_question,
            example_answer: args.example_answer,
        }
    }
}
