//! Per-language string tables.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::Language;

// ==================== English Strings ====================

const ENGLISH: &[(&str, &str)] = &[
    // Header and navigation
    ("appName", "Course Board"),
    ("courses", "Courses"),
    ("teachers", "Teachers"),
    ("schedule", "Schedule"),
    ("posts", "Posts"),
    ("history", "History"),
    // Login
    ("welcomeMessage", "Welcome!"),
    ("enterUsername", "Please enter your name to continue."),
    ("username", "Username"),
    ("password", "Password"),
    ("enter", "Enter"),
    ("adminLogin", "Admin Login"),
    ("login", "Login"),
    ("invalidCredentials", "Invalid credentials"),
    // Views
    ("viewOnTelegram", "View on Telegram"),
    ("comingSoon", "content coming soon."),
    ("contact", "Contact"),
    ("installApp", "Install App"),
    ("installInstructions", "Add this site to your home screen for quick access."),
    ("close", "Close"),
    // Admin panel
    ("adminDashboard", "Admin Dashboard"),
    ("logout", "Logout"),
    ("manageContent", "Manage the content of the site."),
    ("manageCourses", "Manage Courses"),
    ("managePosts", "Manage Posts"),
    ("manageTeachers", "Manage Teachers"),
    ("manageSchedule", "Manage Schedule"),
    ("manageHistory", "Manage History"),
    ("manageContact", "Manage Contact"),
    ("viberNumber", "Viber Number"),
    ("saveChanges", "Save Changes"),
    ("confirmDelete", "Are you sure you want to delete this item?"),
    // Form fields
    ("title", "Title"),
    ("teacher", "Teacher"),
    ("telegramLink", "Telegram Link"),
    ("date", "Date"),
    ("description", "Description"),
    ("content", "Content"),
    ("imageUrl", "Image URL"),
    ("name", "Name"),
    ("bio", "Bio"),
    ("day", "Day"),
    ("time", "Time"),
    ("topic", "Topic"),
    // Notifications
    ("itemAdded", "Item added"),
    ("itemUpdated", "Item updated"),
    ("itemDeleted", "Item deleted"),
    ("saved", "Saved"),
];

// ==================== Myanmar Strings ====================

const MYANMAR: &[(&str, &str)] = &[
    ("appName", "သင်တန်းဘုတ်"),
    ("courses", "သင်တန်းများ"),
    ("teachers", "ဆရာများ"),
    ("schedule", "အချိန်ဇယား"),
    ("posts", "ပို့စ်များ"),
    ("history", "သမိုင်း"),
    ("welcomeMessage", "ကြိုဆိုပါသည်!"),
    ("enterUsername", "ဆက်လက်ရန် သင့်အမည်ကို ထည့်ပါ။"),
    ("username", "အသုံးပြုသူအမည်"),
    ("password", "စကားဝှက်"),
    ("enter", "ဝင်မည်"),
    ("adminLogin", "အက်ဒမင် ဝင်ရန်"),
    ("login", "ဝင်ရောက်ရန်"),
    ("invalidCredentials", "အချက်အလက် မမှန်ကန်ပါ"),
    ("viewOnTelegram", "Telegram တွင် ကြည့်ရန်"),
    ("comingSoon", "မကြာမီ လာမည်။"),
    ("contact", "ဆက်သွယ်ရန်"),
    ("installApp", "အက်ပ် ထည့်သွင်းရန်"),
    ("installInstructions", "အလွယ်တကူ ဝင်ရောက်နိုင်ရန် ဤဆိုက်ကို ပင်မစာမျက်နှာသို့ ထည့်ပါ။"),
    ("close", "ပိတ်ရန်"),
    ("adminDashboard", "အက်ဒမင် ဒက်ရှ်ဘုတ်"),
    ("logout", "ထွက်ရန်"),
    ("manageContent", "ဆိုက်၏ အကြောင်းအရာများကို စီမံပါ။"),
    ("manageCourses", "သင်တန်းများ စီမံရန်"),
    ("managePosts", "ပို့စ်များ စီမံရန်"),
    ("manageTeachers", "ဆရာများ စီမံရန်"),
    ("manageSchedule", "အချိန်ဇယား စီမံရန်"),
    ("manageHistory", "သမိုင်း စီမံရန်"),
    ("manageContact", "ဆက်သွယ်ရန် စီမံရန်"),
    ("viberNumber", "Viber နံပါတ်"),
    ("saveChanges", "ပြောင်းလဲမှုများ သိမ်းမည်"),
    ("confirmDelete", "ဤအရာကို ဖျက်ရန် သေချာပါသလား?"),
    ("title", "ခေါင်းစဉ်"),
    ("teacher", "ဆရာ"),
    ("telegramLink", "Telegram လင့်ခ်"),
    ("date", "ရက်စွဲ"),
    ("description", "ဖော်ပြချက်"),
    ("content", "အကြောင်းအရာ"),
    ("imageUrl", "ပုံ URL"),
    ("name", "အမည်"),
    ("bio", "ကိုယ်ရေးအကျဉ်း"),
    ("day", "နေ့"),
    ("time", "အချိန်"),
    ("topic", "ခေါင်းစဉ်"),
    ("itemAdded", "ထည့်ပြီးပါပြီ"),
    ("itemUpdated", "ပြင်ဆင်ပြီးပါပြီ"),
    ("itemDeleted", "ဖျက်ပြီးပါပြီ"),
    ("saved", "သိမ်းပြီးပါပြီ"),
];

/// Lookup tables for every language, built once on first access.
pub struct LocaleTable {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

static TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    pub fn get() -> &'static LocaleTable {
        TABLE.get_or_init(|| LocaleTable {
            tables: Language::ALL
                .into_iter()
                .map(|language| (language, raw_entries(language).iter().copied().collect()))
                .collect(),
        })
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .copied()
    }

    /// Raw `(key, string)` pairs for a language, in declaration order.
    pub fn entries(&self, language: Language) -> &'static [(&'static str, &'static str)] {
        raw_entries(language)
    }
}

fn raw_entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::English => ENGLISH,
        Language::Myanmar => MYANMAR,
    }
}
