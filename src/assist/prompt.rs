use handlebars::Handlebars;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Template error: {0}")]
    TemplateError(#[from] Box<handlebars::TemplateError>),
    #[error("Render error: {0}")]
    RenderError(#[from] handlebars::RenderError),
    #[error("Unknown prompt template '{0}'")]
    UnknownTemplate(String),
    #[error("A topic is required")]
    MissingTopic,
}

/// Built-in prompt templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    BlogPost,
    ServiceDescription,
    ProjectSummary,
    SeoMeta,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] = [
        PromptKind::BlogPost,
        PromptKind::ServiceDescription,
        PromptKind::ProjectSummary,
        PromptKind::SeoMeta,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PromptKind::BlogPost => "blog-post",
            PromptKind::ServiceDescription => "service-description",
            PromptKind::ProjectSummary => "project-summary",
            PromptKind::SeoMeta => "seo-meta",
        }
    }

    fn source(self) -> &'static str {
        match self {
            PromptKind::BlogPost => BLOG_POST_TEMPLATE,
            PromptKind::ServiceDescription => SERVICE_DESCRIPTION_TEMPLATE,
            PromptKind::ProjectSummary => PROJECT_SUMMARY_TEMPLATE,
            PromptKind::SeoMeta => SEO_META_TEMPLATE,
        }
    }
}

impl FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| PromptError::UnknownTemplate(s.to_string()))
    }
}

/// Values substituted into a prompt template.
/// Placeholders: {{topic}}, {{tone}}, {{keywords}}, {{notes}}
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptContext {
    pub topic: String,
    pub tone: Option<String>,
    pub keywords: Vec<String>,
    pub notes: Option<String>,
}

const BLOG_POST_TEMPLATE: &str = r"Write a blog post for a software agency's website.

Topic: {{topic}}
{{#if tone}}Tone: {{tone}}
{{/if}}{{#if keywords}}Work in these keywords naturally: {{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}{{#if notes}}Additional notes: {{notes}}
{{/if}}
Use Markdown with a short introduction, descriptive headings and a closing call to action.";

const SERVICE_DESCRIPTION_TEMPLATE: &str = r"Describe a service offered by a software agency.

Service: {{topic}}
{{#if tone}}Tone: {{tone}}
{{/if}}{{#if keywords}}Highlight: {{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}{{#if notes}}Additional notes: {{notes}}
{{/if}}
Start with a one-sentence summary, then two short paragraphs on what the client gets.";

const PROJECT_SUMMARY_TEMPLATE: &str = r"Summarize a client project for a portfolio page.

Project: {{topic}}
{{#if tone}}Tone: {{tone}}
{{/if}}{{#if keywords}}Technologies and outcomes: {{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}{{#if notes}}Additional notes: {{notes}}
{{/if}}
Cover the challenge, the solution and the measurable results in under 200 words.";

const SEO_META_TEMPLATE: &str = r#"Write SEO metadata for a web page.

Page topic: {{topic}}
{{#if keywords}}Target keywords: {{#each keywords}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}
{{/if}}{{#if notes}}Additional notes: {{notes}}
{{/if}}
Respond with a meta title under 60 characters and a meta description under 160 characters, as JSON: {"metaTitle": "...", "metaDescription": "..."}"#;

/// Renders the built-in prompt templates.
pub struct PromptBuilder {
    handlebars: Handlebars<'static>,
}

impl PromptBuilder {
    pub fn new() -> Result<Self, PromptError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        for kind in PromptKind::ALL {
            handlebars
                .register_template_string(kind.name(), kind.source())
                .map_err(Box::new)?;
        }
        Ok(Self { handlebars })
    }

    pub fn render(&self, kind: PromptKind, context: &PromptContext) -> Result<String, PromptError> {
        if context.topic.trim().is_empty() {
            return Err(PromptError::MissingTopic);
        }
        Ok(self.handlebars.render(kind.name(), context)?)
    }
}
