//! UI strings
//!
//! Every user-facing string lives here, keyed by language. Each language also
//! carries a pure template function producing the WhatsApp notification text
//! from the (giver, receiver) names; names are inserted verbatim.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Tr,
    De,
    Fr,
    Es,
}

impl LanguageCode {
    /// All languages, in selector order
    pub const ALL: [Self; 5] = [Self::En, Self::Tr, Self::De, Self::Fr, Self::Es];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "tr" => Some(Self::Tr),
            "de" => Some(Self::De),
            "fr" => Some(Self::Fr),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// The string set for this language
    pub fn translation(self) -> &'static Translation {
        match self {
            Self::En => &EN,
            Self::Tr => &TR,
            Self::De => &DE,
            Self::Fr => &FR,
            Self::Es => &ES,
        }
    }
}

/// One language's worth of UI text
pub struct Translation {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub year_tag: &'static str,
    pub input_desc: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_phone: &'static str,
    pub add_button: &'static str,
    pub phone_note: &'static str,
    pub empty_list: &'static str,
    pub raffle_button: &'static str,
    pub matches_ready: &'static str,
    pub matches_desc: &'static str,
    pub reset_button: &'static str,
    pub giver_label: &'static str,
    pub receiver_label: &'static str,
    pub lucky_person: &'static str,
    pub click_to_reveal: &'static str,
    pub whatsapp_button: &'static str,
    /// Notification text from (giver, receiver) names
    pub whatsapp_message: fn(&str, &str) -> String,
    pub alert_min_participants: &'static str,
}

fn message_en(giver: &str, receiver: &str) -> String {
    format!(
        "🎄 *Secret Santa 2025* 🎅\n\nHello {giver}! 👋\n\nYou are buying a gift for: *{receiver}* 🎁\n\nHappy Holidays! ✨"
    )
}

fn message_tr(giver: &str, receiver: &str) -> String {
    format!(
        "🎄 *Yılbaşı Çekilişi 2025* 🎅\n\nMerhaba {giver}! 👋\n\nSana çıkan kişi: *{receiver}* 🎁\n\nMutlu Yıllar! ✨"
    )
}

fn message_de(giver: &str, receiver: &str) -> String {
    format!(
        "🎄 *Wichteln 2025* 🎅\n\nHallo {giver}! 👋\n\nDu beschenkst: *{receiver}* 🎁\n\nFrohe Feiertage! ✨"
    )
}

fn message_fr(giver: &str, receiver: &str) -> String {
    format!(
        "🎄 *Père Noël Secret 2025* 🎅\n\nBonjour {giver}! 👋\n\nTu offres un cadeau à : *{receiver}* 🎁\n\nJoyeuses Fêtes ! ✨"
    )
}

fn message_es(giver: &str, receiver: &str) -> String {
    format!(
        "🎄 *Amigo Invisible 2025* 🎅\n\n¡Hola {giver}! 👋\n\nTe toca regalar a: *{receiver}* 🎁\n\n¡Felices Fiestas! ✨"
    )
}

static EN: Translation = Translation {
    title: "Secret Santa",
    subtitle: "🎅 Everyone gets a gift! Pick your card, find your match.",
    year_tag: "🎄 2025 Special",
    input_desc: "Add names and (optional) phone numbers to the list.",
    placeholder_name: "Name (e.g. John)",
    placeholder_phone: "Phone (555...)",
    add_button: "Add",
    phone_note: "*If you add a phone number, you can send results via WhatsApp.",
    empty_list: "The list is empty",
    raffle_button: "Draw & Match 🎰",
    matches_ready: "Matches Ready!",
    matches_desc: "Everyone should click the card with their name.",
    reset_button: "Start Over ↺",
    giver_label: "Gift Giver",
    receiver_label: "Matched With",
    lucky_person: "Lucky Person",
    click_to_reveal: "Click to Reveal",
    whatsapp_button: "WhatsApp",
    whatsapp_message: message_en,
    alert_min_participants: "At least 2 participants are required!",
};

static TR: Translation = Translation {
    title: "Yılbaşı Çekilişi",
    subtitle: "🎅 Herkes birbirine hediye alıyor! Kartını seç, şanslı kişiyi öğren.",
    year_tag: "🎄 2025 Özel",
    input_desc: "Çekilişe katılacak isimleri ve (isteğe bağlı) telefon numaralarını ekleyin.",
    placeholder_name: "İsim (Örn: Ahmet)",
    placeholder_phone: "Tel No (555...)",
    add_button: "Ekle",
    phone_note: "*Telefon numarası girerseniz, sonuçları WhatsApp üzerinden gönderebilirsiniz.",
    empty_list: "İsim listesi boş",
    raffle_button: "Kura Çek & Eşleştir 🎰",
    matches_ready: "Eşleşmeler Hazır!",
    matches_desc: "Herkes kendi isminin yazdığı karta tıklasın.",
    reset_button: "Yeniden Başla ↺",
    giver_label: "Hediye Alacak Kişi",
    receiver_label: "Kime Çıktı?",
    lucky_person: "Şanslı Kişi",
    click_to_reveal: "Tıkla",
    whatsapp_button: "WhatsApp",
    whatsapp_message: message_tr,
    alert_min_participants: "Çekiliş için en az 2 kişi gerekli!",
};

static DE: Translation = Translation {
    title: "Wichteln",
    subtitle: "🎅 Jeder bekommt ein Geschenk! Wähle deine Karte.",
    year_tag: "🎄 2025 Spezial",
    input_desc: "Fügen Sie Namen und (optional) Telefonnummern hinzu.",
    placeholder_name: "Name (z.B. Hans)",
    placeholder_phone: "Telefon",
    add_button: "Hinzufügen",
    phone_note: "*Mit Telefonnummer können Ergebnisse per WhatsApp gesendet werden.",
    empty_list: "Die Liste ist leer",
    raffle_button: "Auslosen 🎰",
    matches_ready: "Fertig!",
    matches_desc: "Jeder klickt auf die Karte mit seinem Namen.",
    reset_button: "Neustart ↺",
    giver_label: "Schenker",
    receiver_label: "Beschenkter",
    lucky_person: "Glückspilz",
    click_to_reveal: "Klicken",
    whatsapp_button: "WhatsApp",
    whatsapp_message: message_de,
    alert_min_participants: "Mindestens 2 Teilnehmer erforderlich!",
};

static FR: Translation = Translation {
    title: "Père Noël Secret",
    subtitle: "🎅 Échange de cadeaux ! Choisissez votre carte.",
    year_tag: "🎄 Spécial 2025",
    input_desc: "Ajoutez des noms et (facultatif) des numéros de téléphone.",
    placeholder_name: "Nom (ex. Marie)",
    placeholder_phone: "Tél",
    add_button: "Ajouter",
    phone_note: "*Avec un numéro, envoyez les résultats par WhatsApp.",
    empty_list: "La liste est vide",
    raffle_button: "Tirer au sort 🎰",
    matches_ready: "C'est prêt !",
    matches_desc: "Cliquez sur la carte avec votre nom.",
    reset_button: "Recommencer ↺",
    giver_label: "Donneur",
    receiver_label: "Destinataire",
    lucky_person: "L'heureux élu",
    click_to_reveal: "Voir",
    whatsapp_button: "WhatsApp",
    whatsapp_message: message_fr,
    alert_min_participants: "Au moins 2 participants sont requis !",
};

static ES: Translation = Translation {
    title: "Amigo Invisible",
    subtitle: "🎅 ¡Intercambio de regalos! Elige tu tarjeta.",
    year_tag: "🎄 Especial 2025",
    input_desc: "Agrega nombres y (opcional) números de teléfono.",
    placeholder_name: "Nombre (ej. Juan)",
    placeholder_phone: "Teléfono",
    add_button: "Añadir",
    phone_note: "*Si añades teléfono, puedes enviar por WhatsApp.",
    empty_list: "La lista está vacía",
    raffle_button: "Sortear 🎰",
    matches_ready: "¡Listo!",
    matches_desc: "Haz clic en la tarjeta con tu nombre.",
    reset_button: "Reiniciar ↺",
    giver_label: "Regalador",
    receiver_label: "Destinatario",
    lucky_person: "Afortunado",
    click_to_reveal: "Ver",
    whatsapp_button: "WhatsApp",
    whatsapp_message: message_es,
    alert_min_participants: "¡Se requieren al menos 2 participantes!",
};
