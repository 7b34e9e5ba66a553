use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use crate::content;
use crate::core::runner::SnippetRunner;
use crate::native::executor::ProcessExecutor;
use crate::native::locator::PathLocator;
use crate::progress::{DEFAULT_PROGRESS_FILE, Progress};
use crate::quiz;

#[derive(Parser)]
#[command(name = "csharp-trainer")]
#[command(about = "C# tutorial trainer with runnable lesson snippets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the progress file
    #[arg(long, global = true, default_value = DEFAULT_PROGRESS_FILE)]
    pub progress_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the course modules
    Modules,

    /// Render a module and record it as completed
    Show {
        /// Module key or title
        module: String,
    },

    /// List the runnable code snippets embedded in a module
    Snippets {
        /// Module key or title
        module: String,
    },

    /// Compile and execute a C# snippet
    Run {
        /// Module holding the snippet
        #[arg(long, conflicts_with = "file")]
        module: Option<String>,

        /// Zero-based snippet index within the module
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Execute a .cs file instead of an embedded snippet
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print the quiz questions, or score the given answers
    Quiz {
        /// Comma-separated zero-based answer indices
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },

    /// Show saved progress
    Progress,

    /// Show or update saved notes
    Notes {
        /// Replace the saved notes
        #[arg(long, conflicts_with = "clear")]
        set: Option<String>,

        /// Discard the saved notes
        #[arg(long)]
        clear: bool,
    },
}

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let progress_file = cli.progress_file;

    match cli.command {
        Commands::Modules => content::print_module_list(),

        Commands::Show { module } => {
            let module = resolve_module(&module)?;
            content::print_module(module);

            if module.key != content::QUIZ_MODULE_KEY {
                let mut progress = Progress::load(&progress_file).await?;
                if progress.mark_module_completed(module.title) {
                    progress.save(&progress_file).await?;
                }
            }
        }

        Commands::Snippets { module } => {
            content::print_snippets(resolve_module(&module)?);
        }

        Commands::Run {
            module,
            index,
            file,
        } => {
            let source = match (file, module) {
                (Some(path), _) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, Some(name)) => {
                    let module = resolve_module(&name)?;
                    let blocks = content::code_blocks(module);
                    blocks.get(index).cloned().ok_or_else(|| {
                        anyhow::anyhow!(
                            "module `{}` has {} snippet(s), index {} is out of range",
                            module.key,
                            blocks.len(),
                            index
                        )
                    })?
                }
                (None, None) => bail!("pass --module <name> or --file <path>"),
            };

            let runner = SnippetRunner::new(Arc::new(PathLocator), Arc::new(ProcessExecutor));
            match runner.run_snippet(&source).await {
                Ok(body) => println!("{body}"),
                Err(err) => bail!("{err}"),
            }
        }

        Commands::Quiz { answers } => match answers {
            None => {
                for question in quiz::QUIZZES {
                    println!("{}", question.prompt);
                    for (index, option) in question.options.iter().enumerate() {
                        println!("  [{index}] {option}");
                    }
                    println!();
                }
                println!("Answer with `csharp-trainer quiz --answers 0,0,2,...`");
            }
            Some(selected) => {
                let outcome = quiz::score(&selected);
                println!("{}", outcome.summary());

                let mut progress = Progress::load(&progress_file).await?;
                if progress.mark_quiz_completed("Quizzes") {
                    progress.save(&progress_file).await?;
                }
            }
        },

        Commands::Progress => {
            let progress = Progress::load(&progress_file).await?;

            println!("Completed modules:");
            if progress.completed_modules.is_empty() {
                println!("  (none)");
            }
            for title in &progress.completed_modules {
                println!("  - {title}");
            }

            println!("Completed quizzes:");
            if progress.completed_quizzes.is_empty() {
                println!("  (none)");
            }
            for name in &progress.completed_quizzes {
                println!("  - {name}");
            }

            if let Some(updated_at) = progress.updated_at {
                println!("Last updated: {updated_at}");
            }
        }

        Commands::Notes { set, clear } => {
            let mut progress = Progress::load(&progress_file).await?;
            if let Some(notes) = set {
                progress.set_notes(&notes);
                progress.save(&progress_file).await?;
                println!("Notes saved.");
            } else if clear {
                progress.clear_notes();
                progress.save(&progress_file).await?;
                println!("Your notes have been cleared.");
            } else if progress.notes.is_empty() {
                println!("(no notes saved)");
            } else {
                println!("{}", progress.notes);
            }
        }
    }

    Ok(())
}

fn resolve_module(name: &str) -> anyhow::Result<&'static content::Module> {
    content::find_module(name)
        .ok_or_else(|| anyhow::anyhow!("unknown module: {name} (try `csharp-trainer modules`)"))
}
