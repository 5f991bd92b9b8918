pub mod footer;
pub mod header;
pub mod markdown_page;
pub mod shell;
pub mod spider_diagram;

pub use footer::Footer;
pub use header::Header;
pub use markdown_page::{render_markdown, MarkdownPage};
pub use shell::Shell;
pub use spider_diagram::SpiderDiagram;
