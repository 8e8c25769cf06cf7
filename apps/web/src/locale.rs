// Vietnamese UI strings. Column keys on the left are the source CSV headers.

pub const PAGE_TITLE: &str = "Hệ thống đề xuất việc làm";
pub const PAGE_HEADING: &str = "👨‍💼 Hệ thống đề xuất việc làm 👩‍💼";

pub const SEARCH_HEADER: &str = "Tìm kiếm ứng viên";
pub const SEARCH_INPUT_LABEL: &str = "Nhập ID ứng viên:";
pub const SEARCH_SUBMIT: &str = "Tìm kiếm";

pub const PROFILE_HEADER: &str = "👤 Hồ sơ ứng viên";
pub const PROFILE_NOT_FOUND: &str = "Không tìm thấy ứng viên với ID này.";
pub const MISSING_VALUE: &str = "N/A";

/// Profile fields in display order. The first two go in the left column.
pub const PROFILE_FIELDS: &[(&str, &str)] = &[
    ("user_name", "Tên ứng viên"),
    ("desired_job_translated", "Công việc mong muốn"),
    ("industry", "Ngành nghề"),
    ("workplace_desired", "Nơi làm việc mong muốn"),
];

pub const RECOMMENDATIONS_HEADER: &str = "📊 Các công việc được đề xuất";

pub const URL_COLUMN: &str = "URL";
pub const LINK_HEADER: &str = "Link";
pub const LINK_TEXT: &str = "Mở trang tuyển dụng";

/// Job columns shown in the recommendation table, in display order.
pub const JOB_DISPLAY_COLUMNS: &[(&str, &str)] = &[
    ("Job_Name", "Tên công việc"),
    ("Company_name", "Tên công ty"),
    ("Location", "Địa điểm"),
    ("Salary", "Mức lương"),
    (URL_COLUMN, "Đường dẫn"),
];

pub fn recommendations_found(count: usize) -> String {
    format!("Tìm thấy {count} công việc được đề xuất.")
}

pub fn no_recommendations(candidate_id: u64) -> String {
    format!("Không tìm thấy đề xuất nào cho ứng viên có ID: {candidate_id}")
}

pub const MISSING_FILE: &str = "Lỗi: Không tìm thấy tệp dữ liệu.";
pub const REQUIRED_FILES: &str = "Vui lòng đảm bảo các tệp dữ liệu sau tồn tại:";
pub const UNEXPECTED_ERROR: &str = "Đã xảy ra lỗi không mong muốn trong ứng dụng.";
pub const INVALID_INPUT: &str = "ID ứng viên phải là số nguyên không âm.";
pub const CANDIDATE_ID_TOO_LARGE: &str = "ID ứng viên quá lớn, không có ứng viên nào với ID này.";

pub fn detail(message: &str) -> String {
    format!("Chi tiết: {message}")
}

pub fn error_detail(message: &str) -> String {
    format!("Chi tiết lỗi: {message}")
}
