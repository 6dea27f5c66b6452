use serde_yaml::Mapping;

use crate::utils::error::BoxResult;

/// Instruction sent as the system message with every post
pub const SYSTEM_PROMPT: &str = r#"You are an expert technical writer and translator for cloud infrastructure, DevOps, MLOps and AI platform content.

## Task
Translate the given Korean Astro blog post into professional, SEO-optimized American English.

## Front Matter
- title: a compelling, keyword-rich title of roughly 50-60 characters that names the key tools, technologies or concepts.
- description: a meta description of roughly 150-160 characters that carries the target keywords and states what the reader gains.
- Keep every other front matter key (pubDate, tags, etc.) exactly as it is.

## Body
- Use a professional but approachable tone for senior engineers.
- Do not change code, commands, configuration or technical terms.
- Keep the author's voice and personal experience ("In my experience...", "I found that...").
- Keep all Markdown structure: headings, code blocks, links, images, lists, blockquotes.
- Use the commonly accepted English term for Korean technical jargon.
- Leave product names, tool names and proper nouns unchanged (e.g. Kubernetes, PostgreSQL, KEDA).
- Write headings as clear, descriptive phrases.

## Quality
- Prefer active voice and drop filler words.
- The result must read as if it had been written in English.
- Translate faithfully: do not add or remove content.
- Do not change the filename or slug.

## Output Format
Return the complete translated Markdown file with its YAML front matter.
- The title and description MUST be in English. Do not leave them in Korean.
- Do not wrap the output in a code block (no ``` markers).
- Start directly with --- and the YAML front matter."#;

/// Serialize front matter the way it is written back to disk: keys in
/// their original order, non-ASCII text unescaped, no document marker
pub fn dump_front_matter(front_matter: &Mapping) -> BoxResult<String> {
    if front_matter.is_empty() {
        return Ok(String::new());
    }
    let yaml = serde_yaml::to_string(front_matter)?;
    Ok(yaml.trim().to_string())
}

/// User message carrying the post to translate
pub fn build_prompt(front_matter: &Mapping, body: &str) -> BoxResult<String> {
    Ok(format!(
        "Translate the following Astro Markdown post to English.\n\n---\n{}\n---\n\n{}",
        dump_front_matter(front_matter)?,
        body
    ))
}
