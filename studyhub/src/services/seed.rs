//! Built-in content used when no saved state exists (or it cannot be read).

use crate::models::{QuizQuestion, RoadmapItem};

pub fn default_roadmap() -> Vec<RoadmapItem> {
    vec![
        RoadmapItem {
            id: "1".to_string(),
            title_en: "BA Planning & Monitoring".to_string(),
            title_vi: "BA Planning & Monitoring".to_string(),
            description_en:
                "Establish the tasks, techniques, and tools needed to manage requirements."
                    .to_string(),
            description_vi:
                "Thiết lập các tác vụ, kỹ thuật và công cụ cần thiết để quản lý yêu cầu."
                    .to_string(),
            content_en: "This knowledge area describes the tasks that business analysts perform \
to organize and coordinate the efforts of business analysts and stakeholders. These tasks \
produce outputs that are used as a key input and guidelines for the other tasks throughout \
the BABOK® Guide.\n\nKey Tasks:\n1. Plan Business Analysis Approach\n2. Plan Stakeholder \
Engagement\n3. Plan Business Analysis Governance\n4. Plan Business Analysis Information \
Management\n5. Identify Business Analysis Performance Improvements"
                .to_string(),
            content_vi: "Vùng kiến thức này mô tả các nhiệm vụ mà các nhà phân tích nghiệp vụ \
thực hiện để tổ chức và phối hợp nỗ lực của các nhà phân tích nghiệp vụ và các bên liên quan. \
Các nhiệm vụ này tạo ra các kết quả đầu ra được sử dụng làm đầu vào chính và hướng dẫn cho \
các nhiệm vụ khác trong suốt Hướng dẫn BABOK®.\n\nCác nhiệm vụ chính:\n1. Lập kế hoạch \
phương pháp tiếp cận BA\n2. Lập kế hoạch thu hút sự tham gia của Stakeholders\n3. Lập kế \
hoạch quản trị BA\n4. Lập kế hoạch quản lý thông tin BA\n5. Xác định các cải tiến hiệu suất BA"
                .to_string(),
            order: 1,
        },
        RoadmapItem {
            id: "2".to_string(),
            title_en: "Elicitation & Collaboration".to_string(),
            title_vi: "Elicitation & Collaboration".to_string(),
            description_en:
                "Prepare, conduct, and confirm elicitation activities with Stakeholders."
                    .to_string(),
            description_vi:
                "Chuẩn bị, thực hiện và xác nhận các hoạt động khơi gợi yêu cầu với Stakeholders."
                    .to_string(),
            content_en: "Elicitation and Collaboration describes the tasks that business \
analysts perform to prepare for and conduct elicitation activities and confirm the results \
obtained. It also describes the communication with stakeholders once the business analysis \
information is elicited and the ongoing collaboration with them throughout the business \
analysis activities."
                .to_string(),
            content_vi: "Khơi gợi và Hợp tác mô tả các nhiệm vụ mà các nhà phân tích nghiệp vụ \
thực hiện để chuẩn bị và thực hiện các hoạt động khơi gợi và xác nhận kết quả thu được. Nó \
cũng mô tả việc giao tiếp với các bên liên quan sau khi thông tin phân tích nghiệp vụ được \
khơi gợi và sự hợp tác liên tục với họ trong suốt các hoạt động phân tích nghiệp vụ."
                .to_string(),
            order: 2,
        },
    ]
}

pub fn default_questions() -> Vec<QuizQuestion> {
    vec![QuizQuestion {
        id: "q1".to_string(),
        question_en:
            "What is the primary goal of the \"Elicitation & Collaboration\" knowledge area?"
                .to_string(),
        question_vi: "Mục tiêu chính của vùng kiến thức \"Elicitation & Collaboration\" là gì?"
            .to_string(),
        options_en: vec![
            "To define the solution scope".to_string(),
            "To draw UML diagrams".to_string(),
            "To obtain information from Stakeholders".to_string(),
            "To manage project budget".to_string(),
        ],
        options_vi: vec![
            "Để xác định solution scope".to_string(),
            "Để vẽ UML diagrams".to_string(),
            "Để thu thập thông tin từ Stakeholders".to_string(),
            "Để quản lý project budget".to_string(),
        ],
        correct_answer_index: 2,
        explanation_en: "Elicitation & Collaboration focuses on obtaining information from \
stakeholders and confirming the results. It involves ongoing communication and relationship \
building throughout the Business Analysis process. This ensures that the requirements \
gathered truly reflect the needs of the business and its users."
            .to_string(),
        explanation_vi: "Elicitation & Collaboration tập trung vào việc thu thập thông tin từ \
stakeholders và xác nhận kết quả. Nó bao gồm giao tiếp liên tục và xây dựng mối quan hệ \
trong suốt quá trình Business Analysis. Điều này đảm bảo rằng các yêu cầu được thu thập \
phản ánh đúng nhu cầu của doanh nghiệp và người dùng."
            .to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn seed_content_satisfies_model_invariants() {
        for item in default_roadmap() {
            item.validate().expect("seed roadmap item must be valid");
        }
        for question in default_questions() {
            question.validate().expect("seed question must be valid");
        }
    }
}
