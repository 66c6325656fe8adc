//! OCR command implementation.

use crate::cli::OcrArgs;
use crate::context::AppContext;
use crate::error::Result;
use crate::input::recognize_image;
use crate::output::Formatter;
use checkmate_ocr::{ERROR_SENTINEL_PREFIX, NO_TEXT_SENTINEL};

/// Execute the ocr command.
///
/// Prints the recognized text; the OCR sentinels are printed as warnings.
pub async fn execute_ocr(args: OcrArgs, ctx: &AppContext, formatter: &Formatter) -> Result<()> {
    let text = recognize_image(&args.image, &ctx.text_extractor())?;

    if text.starts_with(ERROR_SENTINEL_PREFIX) || text == NO_TEXT_SENTINEL {
        eprintln!("{}", formatter.warning(&text));
    } else {
        println!("{}", text);
    }

    Ok(())
}
