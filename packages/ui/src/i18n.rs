//! Interface languages and the navigation label table.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Name of the language in itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Ar => "العربية",
        }
    }

    /// Value for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En | Language::Fr => "ltr",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnsupportedLanguage(pub String);

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| code == lang.code() || code.starts_with(&format!("{}-", lang.code())))
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

/// Translatable interface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Home,
    About,
    Videos,
    Contact,
    Dashboard,
    SubmitCase,
    BookConsultation,
    Admin,
    Login,
    Register,
    Logout,
    Privacy,
    Terms,
    Welcome,
}

/// Translate `label` into `lang`.
pub fn t(lang: Language, label: Label) -> &'static str {
    use Label::*;
    use Language::*;

    match (label, lang) {
        (Home, En) => "Home",
        (Home, Fr) => "Accueil",
        (Home, Ar) => "الرئيسية",
        (About, En) => "About",
        (About, Fr) => "À propos",
        (About, Ar) => "من نحن",
        (Videos, En) => "Legal Videos",
        (Videos, Fr) => "Vidéos juridiques",
        (Videos, Ar) => "فيديوهات قانونية",
        (Contact, En) => "Contact",
        (Contact, Fr) => "Contact",
        (Contact, Ar) => "اتصل بنا",
        (Dashboard, En) => "Dashboard",
        (Dashboard, Fr) => "Tableau de bord",
        (Dashboard, Ar) => "لوحة التحكم",
        (SubmitCase, En) => "Submit Case",
        (SubmitCase, Fr) => "Soumettre un dossier",
        (SubmitCase, Ar) => "تقديم قضية",
        (BookConsultation, En) => "Book Consultation",
        (BookConsultation, Fr) => "Réserver une consultation",
        (BookConsultation, Ar) => "حجز استشارة",
        (Admin, En) => "Admin",
        (Admin, Fr) => "Administration",
        (Admin, Ar) => "الإدارة",
        (Login, En) => "Login",
        (Login, Fr) => "Connexion",
        (Login, Ar) => "تسجيل الدخول",
        (Register, En) => "Register",
        (Register, Fr) => "S'inscrire",
        (Register, Ar) => "إنشاء حساب",
        (Logout, En) => "Logout",
        (Logout, Fr) => "Déconnexion",
        (Logout, Ar) => "تسجيل الخروج",
        (Privacy, En) => "Privacy Policy",
        (Privacy, Fr) => "Politique de confidentialité",
        (Privacy, Ar) => "سياسة الخصوصية",
        (Terms, En) => "Terms of Service",
        (Terms, Fr) => "Conditions d'utilisation",
        (Terms, Ar) => "شروط الخدمة",
        (Welcome, En) => "Welcome",
        (Welcome, Fr) => "Bienvenue",
        (Welcome, Ar) => "مرحبا",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
        assert_eq!(Language::from_code("fr-CA"), Language::Fr);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Fr.dir(), "ltr");
    }

    #[test]
    fn test_translations() {
        assert_eq!(t(Language::En, Label::Dashboard), "Dashboard");
        assert_eq!(t(Language::Fr, Label::Logout), "Déconnexion");
        assert_ne!(t(Language::Ar, Label::Home), t(Language::En, Label::Home));
    }
}
