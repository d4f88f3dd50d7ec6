//! # Table Formatter
//!
//! 行データを等幅テキストの表に整形する
//!
//! 並び替えは行わない（順序はクエリ側の責務）。同じ入力には常に同じ出力を返す。

/// 列幅の下限
pub const MIN_COLUMN_WIDTH: usize = 10;

/// 空の入力に対して表の代わりに出力する文言
pub const NO_DATA_NOTICE: &str = "No data available.";

const COLUMN_SEPARATOR: &str = " | ";

/// 各列の幅を計算する
///
/// 幅 = max(見出しの文字数, 全行の値の文字数, `MIN_COLUMN_WIDTH`)
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|value| value.chars().count())
                .fold(header.chars().count(), usize::max)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect()
}

fn format_line<S: AsRef<str>>(values: &[S], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// 表を描画する
///
/// # Arguments
///
/// * `title` - 表のタイトル
/// * `headers` - 列見出し
/// * `rows` - 文字列化済みの行（与えられた順に出力）
///
/// # Returns
///
/// タイトル・区切り線・見出し・行からなる文字列。
/// `rows` が空の場合はタイトルと `NO_DATA_NOTICE` のみ
pub fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("\n{}\n{}", title, NO_DATA_NOTICE);
    }

    let widths = column_widths(headers, rows);
    let header_line = format_line(headers, &widths);
    let separator = "-".repeat(header_line.chars().count());

    let body = rows
        .iter()
        .map(|row| format_line(row, &widths))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{}\n{}\n{}\n{}\n{}",
        title, separator, header_line, separator, body
    )
}
