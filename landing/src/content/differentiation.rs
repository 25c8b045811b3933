use super::ById;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferentiationPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

impl ById for DifferentiationPoint {
    fn id(&self) -> &'static str {
        self.id
    }

    fn all() -> &'static [Self] {
        DIFFERENTIATION
    }
}

pub const DIFFERENTIATION: &[DifferentiationPoint] = &[
    DifferentiationPoint {
        id: "spec-mode",
        title: "Spec 모드",
        description: "요구사항을 입력하면 설계 → 코드 → 테스트까지 자동으로 분리된 단위 작업으로 관리.",
        icon: "📋",
    },
    DifferentiationPoint {
        id: "vs-code",
        title: "VS code와 호환",
        description: "그동안 사용해왔던 확장 \n 그대로 가져와 시작이 가능해요.",
        icon: "🖥️",
    },
    DifferentiationPoint {
        id: "natural-language",
        title: "자연어로 Hooks 설정",
        description: "일상 언어로 원하는 개발 자동화를 지시하면 곧바로 실행 가능한 hook으로 변환.",
        icon: "💬",
    },
];
