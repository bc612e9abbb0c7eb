//! Static portfolio data: projects, skills, and every localized string the
//! screens render. The app ships its content compiled in; there is no data
//! file to load.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Pt,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EN" => Some(Language::En),
            "PT" => Some(Language::Pt),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Pt,
            Language::Pt => Language::En,
        }
    }
}

/// An EN/PT string pair.
#[derive(Debug, Clone, Copy)]
pub struct Localized {
    pub en: &'static str,
    pub pt: &'static str,
}

impl Localized {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Pt => self.pt,
        }
    }
}

const fn loc(en: &'static str, pt: &'static str) -> Localized {
    Localized { en, pt }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Video,
    Comparison,
    Image,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Video => "VIDEO",
            ProjectKind::Comparison => "BEFORE/AFTER",
            ProjectKind::Image => "STILL",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub title: Localized,
    pub category: Localized,
    pub year: &'static str,
    pub kind: ProjectKind,
    pub media_url: Option<&'static str>,
    pub video_url: Option<&'static str>,
    pub before_image: Option<&'static str>,
    pub after_image: Option<&'static str>,
    pub description: Localized,
    pub details: Localized,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: Localized,
    pub level: u8, // 0-100
    pub category: &'static str,
}

pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub role: &'static str,
    pub cta: &'static str,
}

pub fn hero_text(lang: Language) -> HeroText {
    match lang {
        Language::En => HeroText {
            title: "DREAM",
            subtitle: "EDITED",
            role: "VFX // EDITING // 3D",
            cta: "SEE MORE",
        },
        Language::Pt => HeroText {
            title: "SONHO",
            subtitle: "EDITADO",
            role: "VFX // EDIÇÃO // 3D",
            cta: "VER MAIS",
        },
    }
}

pub struct AboutText {
    pub heading: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub stat_pcd: &'static str,
    pub stat_setup: &'static str,
}

pub fn about_text(lang: Language) -> AboutText {
    match lang {
        Language::En => AboutText {
            heading: "THE OPERATOR",
            name: "RAFAEL ALVES DA COSTA",
            role: "DIGITAL GAMES STUDENT // VFX ARTIST",
            bio: "I am a 19-year-old digital artisan based in Curitiba. My focus is on the \
                  convergence of raw footage and synthetic reality. I specialize in \
                  post-production, visual design, image manipulation and AI use.",
            stat_pcd: "PCD (Partial Hearing / Hearing Aid User)",
            stat_setup: "Local workspace",
        },
        Language::Pt => AboutText {
            heading: "O OPERADOR",
            name: "RAFAEL ALVES DA COSTA",
            role: "ESTUDANTE DE JOGOS DIGITAIS // ARTISTA VFX",
            bio: "Tenho 19 anos, sou um artista digital baseado em Curitiba. Meu foco é na \
                  convergência entre filmagem bruta e realidade sintética. Especialista em \
                  pós-produção, design visual, manipulação de imagem e uso de IA.",
            stat_pcd: "PCD (Audição Parcial / Usuário de Aparelho)",
            stat_setup: "Estação de trabalho local",
        },
    }
}

/// Per-screen UI labels.
pub struct Strings {
    pub works: &'static str,
    pub archives: &'static str,
    pub click_details: &'static str,
    pub overview: &'static str,
    pub technical_details: &'static str,
    pub status: &'static str,
    pub profile_data: &'static str,
    pub core_competencies: &'static str,
    pub software_stack: &'static str,
    pub footer_status: &'static str,
    pub footer_credits: &'static str,
}

pub fn strings(lang: Language) -> Strings {
    match lang {
        Language::En => Strings {
            works: "WORKS",
            archives: "SELECTED_FILES_FROM_ARCHIVE",
            click_details: "CLICK FOR DETAILS",
            overview: "OVERVIEW",
            technical_details: "TECHNICAL_DETAILS",
            status: "STATUS: ARCHIVED",
            profile_data: "PROFILE_DATA",
            core_competencies: "CORE_COMPETENCIES",
            software_stack: "SOFTWARE_STACK",
            footer_status: "SYSTEM STATUS: ONLINE",
            footer_credits: "VISUAL ALCHEMIST",
        },
        Language::Pt => Strings {
            works: "TRABALHOS",
            archives: "ARQUIVOS_SELECIONADOS",
            click_details: "CLIQUE PARA DETALHES",
            overview: "VISÃO GERAL",
            technical_details: "DETALHES_TÉCNICOS",
            status: "STATUS: ARQUIVADO",
            profile_data: "DADOS_DO_PERFIL",
            core_competencies: "COMPETÊNCIAS_PRINCIPAIS",
            software_stack: "FERRAMENTAS",
            footer_status: "SISTEMA: ONLINE",
            footer_credits: "ALQUIMISTA VISUAL",
        },
    }
}

pub const CONTACT_EMAIL: &str = "rafinha.alvescosta@gmail.com";
pub const CONTACT_PHONE: &str = "+55 (41) 99527-3616";
pub const CONTACT_LOCATION: &str = "Curitiba, PR, Brazil";

pub fn core_skills() -> Vec<Skill> {
    vec![
        Skill {
            name: loc("Color Grading", "Colorização"),
            level: 60,
            category: "Visual",
        },
        Skill {
            name: loc("Compositing", "Composição"),
            level: 90,
            category: "Visual",
        },
        Skill {
            name: loc("3D Logic", "Lógica 3D"),
            level: 70,
            category: "3D",
        },
        Skill {
            name: loc("Sound Design", "Design de Som"),
            level: 80,
            category: "Audio",
        },
        Skill {
            name: loc("Motion", "Movimento"),
            level: 70,
            category: "Animation",
        },
        Skill {
            name: loc("Storytelling", "Narrativa"),
            level: 80,
            category: "Creative",
        },
    ]
}

pub fn software_stack() -> Vec<Skill> {
    vec![
        Skill {
            name: loc("DaVinci Resolve", "DaVinci Resolve"),
            level: 90,
            category: "Software",
        },
        Skill {
            name: loc("After Effects", "After Effects"),
            level: 75,
            category: "Software",
        },
        Skill {
            name: loc("Photoshop", "Photoshop"),
            level: 95,
            category: "Software",
        },
        Skill {
            name: loc("Premiere Pro", "Premiere Pro"),
            level: 80,
            category: "Software",
        },
        Skill {
            name: loc("Blender", "Blender"),
            level: 75,
            category: "Software",
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "01",
            title: loc("CHROMA VELOCITY", "VELOCIDADE CHROMA"),
            category: loc("Video Editing", "Edição de Vídeo"),
            year: "2024",
            kind: ProjectKind::Video,
            media_url: Some("https://www.dropbox.com/scl/fi/x7ysw80bm31dsobwpgmms/Felps-Thumbnail-Gemini.jpeg?raw=1"),
            video_url: Some("https://www.dropbox.com/scl/fi/g0qbn45m1svwt14x8bze4/V-deo-AUTO-COMPLETAR-Felps-Portifolio.mp4?raw=1"),
            before_image: None,
            after_image: None,
            description: loc(
                "High-octane music video editing with complex transitions.",
                "Edição de videoclipe de alta energia com transições complexas.",
            ),
            details: loc(
                "Edited in DaVinci Resolve using advanced color grading techniques to match the cyberpunk aesthetic.",
                "Editado no DaVinci Resolve usando técnicas avançadas de color grading para combinar com a estética cyberpunk.",
            ),
        },
        Project {
            id: "02",
            title: loc("NEON RECONSTRUCTION", "RECONSTRUÇÃO NEON"),
            category: loc("Photo Manipulation", "Manipulação de Foto"),
            year: "2023",
            kind: ProjectKind::Comparison,
            media_url: None,
            video_url: None,
            before_image: Some("https://www.dropbox.com/scl/fi/yrrj96li3adi39dzxtdje/Lego-Cinematic.png?raw=1"),
            after_image: Some("https://www.dropbox.com/scl/fi/8321snxtq54k0wvacyy7p/Lego-Cinematic-Gemini.png?raw=1"),
            description: loc(
                "Transformation of urban photography.",
                "Transformação de fotografia urbana.",
            ),
            details: loc(
                "A complex matte painting and composition work in Photoshop.",
                "Um trabalho complexo de matte painting e composição no Photoshop.",
            ),
        },
        Project {
            id: "03",
            title: loc("PROJECT TITAN", "PROJETO TITAN"),
            category: loc("3D Modeling", "Modelagem 3D"),
            year: "2024",
            kind: ProjectKind::Image,
            media_url: Some("https://www.dropbox.com/scl/fi/g734wa9879hc50rg63q4a/Big-Daddy-Kane.png?raw=1"),
            video_url: None,
            before_image: None,
            after_image: None,
            description: loc(
                "Hard surface modeling character design.",
                "Modelagem hard surface de personagem.",
            ),
            details: loc(
                "Modeled and rendered in Blender.",
                "Modelado e renderizado no Blender.",
            ),
        },
        Project {
            id: "04",
            title: loc("AURA SYNC", "SINCRONIA AURA"),
            category: loc("Motion Graphics", "Motion Graphics"),
            year: "2024",
            kind: ProjectKind::Video,
            media_url: Some("https://www.dropbox.com/scl/fi/oph2hwx7jddg0wjcf1h6o/Peak-Thumbnail-Gemini.jpeg?raw=1"),
            video_url: Some("https://www.dropbox.com/scl/fi/h4d54xt0gg89xppvl56ob/Grizzy-Peak-Portifolio.mp4?raw=1"),
            before_image: None,
            after_image: None,
            description: loc(
                "Abstract data visualization loops.",
                "Loops abstratos de visualização de dados.",
            ),
            details: loc(
                "Created in After Effects for massive LED walls.",
                "Criado no After Effects para paredes de LED massivas.",
            ),
        },
        Project {
            id: "05",
            title: loc("BOB WARS - VERTICAL", "BOB WARS - VERTICAL"),
            category: loc("Photo Manipulation", "Manipulação de Foto"),
            year: "2023",
            kind: ProjectKind::Comparison,
            media_url: None,
            video_url: None,
            before_image: Some("https://www.dropbox.com/scl/fi/0vl0zss1dbur6qjb6eers/Bob-Wars-Final.png?raw=1"),
            after_image: Some("https://www.dropbox.com/scl/fi/ttxnms1i6ykohb14xirbq/Bob-Wars-Gemini.png?raw=1"),
            description: loc(
                "Vertical edit exploration.",
                "Exploração de edição vertical.",
            ),
            details: loc(
                "Full-scale vertical image manipulation.",
                "Manipulação de imagem vertical em escala total.",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_through_from_str() {
        assert_eq!(Language::from_str("en"), Some(Language::En));
        assert_eq!(Language::from_str("PT"), Some(Language::Pt));
        assert_eq!(Language::from_str("es"), None);
        assert_eq!(Language::En.toggled(), Language::Pt);
        assert_eq!(Language::Pt.toggled(), Language::En);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in core_skills().iter().chain(software_stack().iter()) {
            assert!(skill.level <= 100);
        }
    }

    #[test]
    fn comparison_projects_carry_both_images() {
        for project in projects() {
            match project.kind {
                ProjectKind::Comparison => {
                    assert!(project.before_image.is_some() && project.after_image.is_some());
                }
                ProjectKind::Video => {
                    assert!(project.video_url.is_some());
                }
                ProjectKind::Image => {
                    assert!(project.media_url.is_some());
                }
            }
        }
    }
}
