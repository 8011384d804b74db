mod fake_prompter;
mod fake_runner;
mod memory_site_store;
mod memory_template_store;

#[allow(unused_imports)]
pub use fake_prompter::FakePrompter;
#[allow(unused_imports)]
pub use fake_runner::FakeCommandRunner;
#[allow(unused_imports)]
pub use memory_site_store::MemorySiteStore;
#[allow(unused_imports)]
pub use memory_template_store::MemoryTemplateStore;
