pub mod mcq_prompt;
pub mod upload_page;
