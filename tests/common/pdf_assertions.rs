use lopdf::Object;
use lopdf::content::Operation;

/// Decode WinAnsi string bytes; the printable range used here matches Latin-1
pub fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// All strings shown with `Tj`, in stream order
pub fn shown_text(operations: &[Operation]) -> Vec<String> {
    operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(latin1(bytes)),
            _ => None,
        })
        .collect()
}

/// Raw bytes of every `Tj` operand
pub fn shown_bytes(operations: &[Operation]) -> Vec<Vec<u8>> {
    operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.clone()),
            _ => None,
        })
        .collect()
}

/// Numeric operands of an operation
pub fn numbers(op: &Operation) -> Vec<f32> {
    op.operands.iter().filter_map(|operand| operand.as_float().ok()).collect()
}

/// Every operation with the given operator name
pub fn find_ops<'a>(operations: &'a [Operation], operator: &str) -> Vec<&'a Operation> {
    operations.iter().filter(|op| op.operator == operator).collect()
}

/// Text matrix translation `(x, y)` preceding each `Tj`
pub fn text_positions(operations: &[Operation]) -> Vec<(f32, f32)> {
    let mut positions = Vec::new();
    let mut current = (0.0, 0.0);
    for op in operations {
        match op.operator.as_str() {
            "Tm" => {
                let values = numbers(op);
                current = (values[4], values[5]);
            }
            "Tj" => positions.push(current),
            _ => {}
        }
    }
    positions
}

/// Serialized numbers carry three decimals
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 2e-3
}

/// Assert that a page shows exactly the given lines, in order
#[macro_export]
macro_rules! assert_page_text {
    ($pdf:expr, $page:expr, $expected:expr) => {
        let shown = $crate::common::pdf_assertions::shown_text(&$pdf.operations($page));
        let expected: Vec<String> = $expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(shown, expected, "unexpected text on page {}", $page);
    };
}

/// Assert that some page shows the given string
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let found = (1..=$pdf.page_count() as u32).any(|page| {
            $crate::common::pdf_assertions::shown_text(&$pdf.operations(page))
                .iter()
                .any(|line| line.contains($text))
        });
        assert!(found, "PDF should show '{}'", $text);
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
