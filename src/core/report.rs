use crate::core::assignment::DEFAULT_SESSION_COUNT;
use crate::domain::model::SlotAssignment;
use crate::utils::error::Result;
use rust_xlsxwriter::{ColNum, Format, Image, RowNum, Workbook};
use serde::{Deserialize, Serialize};

/// Column K, where the seed image label goes for up to 8 sessions.
const DEFAULT_IMAGE_COLUMN: ColNum = 10;
const IMAGE_LABEL: &str = "Seed Image";
/// Largest integer a spreadsheet number cell holds exactly.
const MAX_EXACT_NUMBER: u64 = 1 << 53;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLayout {
    pub count: usize,
    pub header_prefix: String,
    pub column_padding: usize,
    pub image_scale: f64,
}

impl Default for SessionLayout {
    fn default() -> Self {
        Self {
            count: DEFAULT_SESSION_COUNT,
            header_prefix: "Session".to_string(),
            column_padding: 5,
            image_scale: 0.1,
        }
    }
}

impl SessionLayout {
    /// The image sits two columns past the last session, but never left of K.
    pub fn image_column(&self) -> ColNum {
        DEFAULT_IMAGE_COLUMN.max(self.count as ColNum + 2)
    }
}

/// Renders the assignment into an in-memory `.xlsx` workbook.
///
/// A1 holds the label and A2 the seed. Slot `i` is written to column `i + 1`
/// under a bold `"<prefix> <i + 1>"` header. With `image` set, the label goes
/// to row 0 and the scaled image is anchored two rows below it.
pub fn build_workbook(
    assignment: &SlotAssignment,
    seed: i64,
    image: Option<&[u8]>,
    layout: &SessionLayout,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.write_string_with_format(0, 0, &layout.header_prefix, &bold)?;
    if seed.unsigned_abs() <= MAX_EXACT_NUMBER {
        worksheet.write_number(1, 0, seed as f64)?;
    } else {
        worksheet.write_string(1, 0, seed.to_string())?;
    }

    for (i, slot) in assignment.slots().iter().enumerate() {
        let col = (i + 1) as ColNum;
        let header = format!("{} {}", layout.header_prefix, i + 1);
        worksheet.write_string_with_format(0, col, &header, &bold)?;

        for (j, student) in slot.iter().enumerate() {
            worksheet.write_string((j + 1) as RowNum, col, student.as_str())?;
        }

        // 空的 slot 以標題寬度為準
        let longest = slot
            .iter()
            .map(|s| s.as_str().chars().count())
            .max()
            .unwrap_or_else(|| header.chars().count());
        worksheet.set_column_width(col, (longest + layout.column_padding) as f64)?;
    }

    if let Some(bytes) = image {
        let image_col = layout.image_column();
        worksheet.write_string_with_format(0, image_col, IMAGE_LABEL, &bold)?;

        let image = Image::new_from_buffer(bytes)?
            .set_scale_width(layout.image_scale)
            .set_scale_height(layout.image_scale);
        worksheet.insert_image(2, image_col, &image)?;
    }

    let buffer = workbook.save_to_buffer()?;
    tracing::debug!(
        "Built workbook with {} sessions ({} bytes)",
        assignment.slot_count(),
        buffer.len()
    );
    Ok(buffer)
}
