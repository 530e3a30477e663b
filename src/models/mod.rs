//! 接口数据结构
//!
//! 与后端约定的请求/响应形状，可选字段统一用 `Option` 表示。

pub mod common;
pub mod error_book;
pub mod knowledge;
pub mod practice;
pub mod question;
pub mod user;

pub use common::{HealthStatus, MessageResp};
pub use error_book::{ErrorBookItem, ErrorBookListResp, ErrorBookQuery};
pub use knowledge::{KnowledgeCreate, KnowledgeNode, KnowledgeUpdate, Tag, TagType};
pub use practice::{CreateSessionResp, FinishResp, QuestionView, SubmitAnswerResp};
pub use question::{
    BriefList, MyQuestionItem, MyQuestionListResp, MyQuestionsQuery, QuestionBrief,
    QuestionOption,
};
pub use user::{
    AdminUserDetail, AdminUserUpdate, RoleRef, Token, User, UserInfo, UserPatch, UserSimple,
    UsersPage, UsersSimplePage,
};
