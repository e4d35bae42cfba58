//! Extraction pipeline: language check, parse, prune, serialize.

use tracing::debug;

use crate::dom;
use crate::error::Result;
use crate::filter;
use crate::options::Options;
use crate::result::ExtractResult;
use crate::serialize::serialize;

/// Run the full extraction pipeline on an HTML string.
///
/// The language is resolved before parsing so an unsupported language fails
/// without doing any work.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let language = options.resolved_language()?;
    debug!(
        html_len = html.len(),
        min_score = options.min_score,
        filtering = options.filtering_enabled(),
        auto_punctuate = options.auto_punctuate,
        %language,
        "starting text extraction"
    );

    let document = dom::parse(html)?;
    filter::filter(&document, options.min_score);

    let result = serialize(&document, options.auto_punctuate, language);
    debug!(
        title_len = result.title.len(),
        body_len = result.body.len(),
        "finished text extraction"
    );
    Ok(result)
}
