pub mod actor_collector;
pub mod profile_resolver;
pub mod company_extractor;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use actor_collector::ActorCollector;
pub use profile_resolver::ProfileResolver;
pub use company_extractor::CompanyExtractor;
pub use pipeline::CompanyPipeline;
