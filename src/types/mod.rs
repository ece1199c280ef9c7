// src/types/mod.rs
//! Data exchanged with the backends

pub mod candidate;
pub mod chat;
pub mod dashboard;
pub mod job;
pub mod pagination;
pub mod repository;
pub mod review;

pub use candidate::{
    AskResponse, AskResult, Candidate, CandidateDraft, CandidatePage, CandidateProfile,
    CandidateStats, CreatedId, FilterResponse, FilteredCandidate, ScoreBreakdown, UploadResponse,
    UploadResult,
};
pub use chat::{
    ChatMessage, ChatReply, ChatRole, ConversationId, SmartChatMessage, SmartChatResponse,
};
pub use dashboard::DashboardOverview;
pub use job::{JobDescription, JobUpdate, NewJob};
pub use pagination::{Page, DEFAULT_PAGE_SIZE};
pub use repository::{RepoConfig, RepoConfigUpdate, Repository, RepositoryOverview};
pub use review::{
    BreakingChange, PRReview, ReviewComment, ReviewFilter, ReviewQuery, ReviewStats,
    ReviewStatusFilter,
};
