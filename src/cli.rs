// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::app_log;
use crate::clients::cv::{FilterOptions, DEFAULT_FILTER_TOP_K};
use crate::clients::ApiClients;
use crate::files::UploadFile;
use crate::types::{
    ConversationId, NewJob, Page, ReviewFilter, ReviewQuery, ReviewStatusFilter, SmartChatMessage,
    DEFAULT_PAGE_SIZE,
};
use crate::utils;

#[derive(Parser)]
#[command(name = "talentdesk")]
#[command(about = "Query the hiring and code-review dashboard backends")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Candidate and review figures; unavailable backends show as zero
    Dashboard,
    /// Candidate records of the main API
    #[command(subcommand)]
    Candidates(CandidatesCommand),
    /// CV screening on the AI service
    #[command(subcommand)]
    Cv(CvCommand),
    /// Job descriptions
    #[command(subcommand)]
    Jobs(JobsCommand),
    /// Pull-request reviews (detail is read from the reviewer service)
    #[command(subcommand)]
    Reviews(ReviewsCommand),
    /// Connected repositories
    #[command(subcommand)]
    Repos(ReposCommand),
    /// Assistant and chat sessions
    #[command(subcommand)]
    Chat(ChatCommand),
}

#[derive(Subcommand)]
pub enum CandidatesCommand {
    List {
        #[arg(long)]
        search: Option<String>,
    },
    Get {
        id: u64,
    },
    Delete {
        id: u64,
    },
    Stats,
}

#[derive(Subcommand)]
pub enum CvCommand {
    /// Paginated candidate pool
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    Get {
        id: u64,
    },
    /// Upload PDF/DOCX CVs
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Ask a question about the candidate pool
    Ask {
        question: String,
        #[arg(long)]
        top_k: Option<u32>,
    },
    /// Score candidates against a job
    Filter {
        job_id: u64,
        #[arg(long, default_value_t = 0.0)]
        min_score: f64,
        #[arg(long, default_value_t = DEFAULT_FILTER_TOP_K)]
        top_k: u32,
    },
    /// Download scored candidates as CSV
    Export {
        job_id: u64,
        #[arg(long, default_value_t = 0.0)]
        min_score: f64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum JobsCommand {
    List {
        /// Include inactive jobs
        #[arg(long)]
        all: bool,
    },
    Get {
        id: u64,
    },
    Create {
        title: String,
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        nice_to_have: Vec<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        remote: bool,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    List {
        #[arg(long)]
        repository: Option<u64>,
        #[arg(long)]
        period: Option<String>,
        /// Match PR title, author or number
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        status: ReviewStatusFilter,
    },
    Get {
        id: u64,
    },
    Stats {
        #[arg(long)]
        period: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReposCommand {
    List,
    Get { id: u64 },
    Config { id: u64 },
    /// Repository with its reviews, from the reviewer service
    Detail { id: u64 },
}

#[derive(Subcommand)]
pub enum ChatCommand {
    /// Ask the assistant
    Ask {
        message: String,
        #[arg(long)]
        conversation: Option<String>,
    },
    /// Send a message in a chat session
    Send {
        message: String,
        #[arg(long)]
        session: Option<String>,
    },
    History {
        session: String,
    },
}

/// Run one command and return what it produced as JSON
pub async fn handle_command(command: Command, clients: &ApiClients) -> Result<Value> {
    let output = match command {
        Command::Dashboard => serde_json::to_value(clients.dashboard().overview().await)?,
        Command::Candidates(command) => handle_candidates(command, clients).await?,
        Command::Cv(command) => handle_cv(command, clients).await?,
        Command::Jobs(command) => handle_jobs(command, clients).await?,
        Command::Reviews(command) => handle_reviews(command, clients).await?,
        Command::Repos(command) => handle_repos(command, clients).await?,
        Command::Chat(command) => handle_chat(command, clients).await?,
    };
    Ok(output)
}

async fn handle_candidates(command: CandidatesCommand, clients: &ApiClients) -> Result<Value> {
    let candidates = clients.candidates();
    let output = match command {
        CandidatesCommand::List { search } => {
            serde_json::to_value(candidates.list(search.as_deref()).await?)?
        }
        CandidatesCommand::Get { id } => serde_json::to_value(candidates.get(id).await?)?,
        CandidatesCommand::Delete { id } => {
            candidates.delete(id).await?;
            app_log!(info, "Deleted candidate {}", id);
            json!({ "deleted": id })
        }
        CandidatesCommand::Stats => serde_json::to_value(candidates.stats().await?)?,
    };
    Ok(output)
}

async fn handle_cv(command: CvCommand, clients: &ApiClients) -> Result<Value> {
    let cv = clients.cv();
    let output = match command {
        CvCommand::List { page, page_size } => {
            let window = Page::for_page(page, page_size);
            let result = cv.list_candidates(window).await?;
            json!({
                "page": page.max(1),
                "total_pages": window.total_pages(result.total),
                "total": result.total,
                "candidates": result.candidates,
            })
        }
        CvCommand::Get { id } => serde_json::to_value(cv.get(id).await?)?,
        CvCommand::Upload { files } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in &files {
                uploads.push(UploadFile::from_path(path).await?);
            }
            let response = cv.upload(uploads).await?;
            app_log!(
                info,
                "Upload finished: {} uploaded, {} failed",
                response.uploaded,
                response.failed
            );
            serde_json::to_value(response)?
        }
        CvCommand::Ask { question, top_k } => serde_json::to_value(cv.ask(&question, top_k).await?)?,
        CvCommand::Filter {
            job_id,
            min_score,
            top_k,
        } => serde_json::to_value(cv.filter(job_id, FilterOptions { min_score, top_k }).await?)?,
        CvCommand::Export {
            job_id,
            min_score,
            output,
        } => {
            let csv = cv.export_csv(job_id, min_score).await?;
            let path = match output {
                Some(path) => path,
                None => {
                    let title = clients
                        .jobs()
                        .get(job_id)
                        .await
                        .map(|job| job.title)
                        .unwrap_or_else(|_| format!("job {}", job_id));
                    PathBuf::from(utils::export_file_name(&title))
                }
            };
            csv.write_to(&path)
                .await
                .with_context(|| format!("Failed to save export to {}", path.display()))?;
            json!({
                "file": path.display().to_string(),
                "bytes": csv.len(),
                "rows": csv.rows()?.len(),
            })
        }
    };
    Ok(output)
}

async fn handle_jobs(command: JobsCommand, clients: &ApiClients) -> Result<Value> {
    let jobs = clients.jobs();
    let output = match command {
        JobsCommand::List { all } => serde_json::to_value(jobs.list(!all).await?)?,
        JobsCommand::Get { id } => serde_json::to_value(jobs.get(id).await?)?,
        JobsCommand::Create {
            title,
            skills,
            nice_to_have,
            description,
            location,
            remote,
        } => {
            let job = NewJob {
                description,
                location,
                remote_allowed: remote,
                nice_to_have_skills: nice_to_have,
                ..NewJob::new(title).with_required_skills(skills)
            };
            let created = jobs.create(&job).await?;
            app_log!(info, "Created job {} ({})", created.id, created.title);
            serde_json::to_value(created)?
        }
        JobsCommand::Delete { id } => {
            jobs.delete(id).await?;
            json!({ "deleted": id })
        }
    };
    Ok(output)
}

async fn handle_reviews(command: ReviewsCommand, clients: &ApiClients) -> Result<Value> {
    let reviews = clients.reviews();
    let output = match command {
        ReviewsCommand::List {
            repository,
            period,
            search,
            status,
        } => {
            let query = ReviewQuery {
                repository_id: repository,
                period,
            };
            let all = reviews.list(&query).await?;
            let filter = ReviewFilter {
                search: search.unwrap_or_default(),
                status,
            };
            serde_json::to_value(filter.apply(&all))?
        }
        ReviewsCommand::Get { id } => {
            serde_json::to_value(clients.reviewer_reviews().get(id).await?)?
        }
        ReviewsCommand::Stats { period } => {
            serde_json::to_value(reviews.stats(period.as_deref()).await?)?
        }
    };
    Ok(output)
}

async fn handle_repos(command: ReposCommand, clients: &ApiClients) -> Result<Value> {
    let repositories = clients.repositories();
    let output = match command {
        ReposCommand::List => serde_json::to_value(repositories.list().await?)?,
        ReposCommand::Get { id } => serde_json::to_value(repositories.get(id).await?)?,
        ReposCommand::Config { id } => serde_json::to_value(repositories.config(id).await?)?,
        ReposCommand::Detail { id } => {
            serde_json::to_value(clients.dashboard().repository_detail(id).await)?
        }
    };
    Ok(output)
}

async fn handle_chat(command: ChatCommand, clients: &ApiClients) -> Result<Value> {
    let output = match command {
        ChatCommand::Ask {
            message,
            conversation,
        } => {
            let conversation = conversation
                .map(ConversationId::from)
                .unwrap_or_else(ConversationId::generate);
            let question = SmartChatMessage::user(message);
            let response = clients
                .smart_chat()
                .query(&question.content, Some(&conversation))
                .await?;
            json!({
                "conversation_id": conversation,
                "sources": response.sources.clone(),
                "messages": [question, SmartChatMessage::assistant(response)],
            })
        }
        ChatCommand::Send { message, session } => {
            serde_json::to_value(clients.chat().query(&message, session.as_deref()).await?)?
        }
        ChatCommand::History { session } => {
            serde_json::to_value(clients.chat().history(&session).await?)?
        }
    };
    Ok(output)
}
