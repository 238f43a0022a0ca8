//! Bilingual UI strings. Every user-facing shell string goes through this
//! table so the language toggle covers the whole surface.

use crate::models::Language;

pub struct UiText {
    pub app_title: &'static str,
    pub roadmap: &'static str,
    pub quiz: &'static str,
    pub admin: &'static str,
    pub chat: &'static str,
    pub language_toggle: &'static str,
    pub quit: &'static str,
    pub back: &'static str,

    // roadmap view
    pub roadmap_hint: &'static str,

    // quiz view
    pub no_questions: &'static str,
    pub progress: &'static str,
    pub select_hint: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub correct_answer: &'static str,
    pub explanation: &'static str,
    pub next: &'static str,
    pub finish: &'static str,
    pub quiz_finished: &'static str,
    pub your_score: &'static str,
    pub new_session: &'static str,

    // admin view
    pub manage_roadmap: &'static str,
    pub manage_questions: &'static str,
    pub add_step: &'static str,
    pub add_question: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub import: &'static str,
    pub export: &'static str,
    pub generate_ai: &'static str,
    pub enter_id: &'static str,
    pub enter_path: &'static str,
    pub enter_topic: &'static str,
    pub enter_count: &'static str,
    pub confirm_delete: &'static str,
    pub deleted: &'static str,
    pub not_found: &'static str,
    pub saved: &'static str,
    pub save_failed: &'static str,
    pub keep_current_hint: &'static str,
    pub exported_to: &'static str,
    pub roadmap_imported: &'static str,
    pub roadmap_import_failed: &'static str,
    pub questions_imported: &'static str,
    pub questions_import_failed: &'static str,
    pub questions_generated: &'static str,
    pub generate_failed: &'static str,

    // chat view
    pub chat_intro: &'static str,
    pub chat_prompt: &'static str,
    pub chat_pending: &'static str,
    pub chat_failed: &'static str,
    pub assistant_offline: &'static str,
}

pub const EN: UiText = UiText {
    app_title: "ITBA Mastery Hub",
    roadmap: "Learning Roadmap",
    quiz: "Practice Quiz",
    admin: "Manage Content",
    chat: "Expert Chat",
    language_toggle: "Tiếng Việt",
    quit: "Quit",
    back: "Back",

    roadmap_hint: "Enter a step number for details, or [b] to go back",

    no_questions: "No questions available. Add some in the Admin panel!",
    progress: "Progress",
    select_hint: "[a-d] select an answer, [s] submit, [x] leave quiz",
    correct: "Correct!",
    incorrect: "Incorrect!",
    correct_answer: "Correct answer",
    explanation: "Detailed Explanation",
    next: "Next",
    finish: "Finish",
    quiz_finished: "Practice Finished!",
    your_score: "Your score",
    new_session: "[r] New Session",

    manage_roadmap: "Roadmap steps",
    manage_questions: "Quiz questions",
    add_step: "Add Step",
    add_question: "Add Question",
    edit: "Edit",
    delete: "Delete",
    import: "Import Data",
    export: "Export Data",
    generate_ai: "Generate with AI",
    enter_id: "Enter id",
    enter_path: "Enter file path",
    enter_topic: "Topic",
    enter_count: "How many questions",
    confirm_delete: "Are you sure? This action cannot be undone. [y/n]",
    deleted: "Deleted.",
    not_found: "No record with that id.",
    saved: "Saved.",
    save_failed: "Could not save: the record is invalid.",
    keep_current_hint: "(press Enter to keep the current value)",
    exported_to: "Exported to",
    roadmap_imported: "Roadmap imported successfully!",
    roadmap_import_failed: "Invalid Roadmap file format.",
    questions_imported: "Questions imported successfully!",
    questions_import_failed: "Invalid Questions file format.",
    questions_generated: "questions added to the bank.",
    generate_failed: "Failed to generate questions.",

    chat_intro: "Consult about Stakeholders, Requirements, BABOK standards, or career advice. Empty line to go back.",
    chat_prompt: "Ask about ITBA",
    chat_pending: "Expert is analyzing...",
    chat_failed: "I encountered an error. Please try again later.",
    assistant_offline: "The AI assistant is not configured (set GEMINI_API_KEY).",
};

pub const VI: UiText = UiText {
    app_title: "Trung tâm CNTT BA",
    roadmap: "Lộ trình Học tập",
    quiz: "Trắc nghiệm",
    admin: "Quản lý Nội dung",
    chat: "Hỏi chuyên gia",
    language_toggle: "English",
    quit: "Thoát",
    back: "Quay lại",

    roadmap_hint: "Nhập số thứ tự để xem chi tiết, hoặc [b] để quay lại",

    no_questions: "Chưa có câu hỏi nào. Hãy thêm trong phần Quản lý!",
    progress: "Tiến độ",
    select_hint: "[a-d] chọn đáp án, [s] nộp bài, [x] rời bài",
    correct: "Chính xác!",
    incorrect: "Sai rồi!",
    correct_answer: "Đáp án đúng",
    explanation: "Mô tả Chi tiết",
    next: "Tiếp theo",
    finish: "Hoàn thành",
    quiz_finished: "Hoàn thành bài luyện tập!",
    your_score: "Điểm của bạn",
    new_session: "[r] Làm lại",

    manage_roadmap: "Bước lộ trình",
    manage_questions: "Câu hỏi trắc nghiệm",
    add_step: "Thêm Bước",
    add_question: "Thêm Câu hỏi",
    edit: "Sửa",
    delete: "Xóa",
    import: "Nhập Dữ liệu",
    export: "Xuất Dữ liệu",
    generate_ai: "Tạo bằng AI",
    enter_id: "Nhập id",
    enter_path: "Nhập đường dẫn tệp",
    enter_topic: "Chủ đề",
    enter_count: "Số lượng câu hỏi",
    confirm_delete: "Bạn có chắc chắn? Hành động này không thể hoàn tác. [y/n]",
    deleted: "Đã xóa.",
    not_found: "Không tìm thấy bản ghi với id này.",
    saved: "Đã lưu.",
    save_failed: "Không thể lưu: bản ghi không hợp lệ.",
    keep_current_hint: "(nhấn Enter để giữ giá trị hiện tại)",
    exported_to: "Đã xuất ra",
    roadmap_imported: "Đã nhập lộ trình thành công!",
    roadmap_import_failed: "Định dạng tệp Lộ trình không hợp lệ.",
    questions_imported: "Đã nhập câu hỏi thành công!",
    questions_import_failed: "Định dạng tệp Câu hỏi không hợp lệ.",
    questions_generated: "câu hỏi đã được thêm vào ngân hàng.",
    generate_failed: "Lỗi khi tạo câu hỏi.",

    chat_intro: "Tư vấn về Stakeholders, Requirements, tiêu chuẩn BABOK hoặc định hướng nghề nghiệp. Dòng trống để quay lại.",
    chat_prompt: "Hỏi về ITBA",
    chat_pending: "Chuyên gia đang phân tích...",
    chat_failed: "Tôi đã gặp lỗi. Vui lòng thử lại sau.",
    assistant_offline: "Trợ lý AI chưa được cấu hình (đặt GEMINI_API_KEY).",
};

pub fn text(language: Language) -> &'static UiText {
    match language {
        Language::En => &EN,
        Language::Vi => &VI,
    }
}
