use crate::route::LegalSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryShot {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
}

pub const GALLERY_SHOTS: &[GalleryShot] = &[
    GalleryShot {
        id: "mechanical-exterior",
        title: "מכפילי חניה חיצוניים",
        subtitle: "בדיקת שרשראות ומתיחת מתקן מכני חיצוני",
        description: "בדיקת שרשראות, מתיחה וכיוון במתקן חניה מכני חיצוני, לפני שמחזירים אותו לעבודה יומיומית.",
        image_src: "images/gallery/chain-check.jpg",
    },
    GalleryShot {
        id: "embedded-building",
        title: "מתקנים טמונים בבנייני מגורים",
        subtitle: "טיפול שוטף במתקן טמון",
        description: "בדיקות שמן, אטמים ותעלות ניקוז במתקן טמון, יחד עם בדיקות בטיחות תקופתיות למערכת ההרמה והבקרה.",
        image_src: "images/gallery/embedded-service.jpg",
    },
    GalleryShot {
        id: "leveling-anchors",
        title: "כיוון מפלסים ועיגונים",
        subtitle: "כיוון מפלסים והידוק עיגונים",
        description: "כיוון מפלסים, בדיקת עיגונים ומנגנוני נעילה במכפילי חניה, כדי למנוע רעידות ושחיקה מואצת.",
        image_src: "images/gallery/leveling.jpg",
    },
    GalleryShot {
        id: "complex-system",
        title: "מערכות חניה מורכבות",
        subtitle: "תחזוקה למערכות מורכבות",
        description: "טיפול בחיישנים, לוחות בקרה וממשקי הנעה במערכות חניה מורכבות, עם דגש על עבודה רציפה וללא השבתות.",
        image_src: "images/gallery/complex-system.jpg",
    },
];

pub const HERO_KICKER: &str = "אביב פתרונות חניה · תחזוקה, מכירה ותיקון מתקנים";
pub const HERO_TITLE: &str = "תחזוקה בראש שקט למתקני החניה שלכם";
pub const HERO_LINES: &[&str] = &[
    "אנחנו דואגים למתקנים. אתם דואגים לדיירים.",
    "שירותי תחזוקה, בדיקות ותיקונים לכל סוגי מתקני החניה.",
    "עם עמידה מלאה בתקנים ותגובה מהירה לתקלות.",
];
pub const HERO_POINTS: &[&str] = &[
    "ליווי ותחזוקה לכל מתקני פתרונות החניה ויצרנים נוספים",
    "תוכנית תחזוקה מותאמת לבנייני מגורים, משרדים וחניונים פרטיים",
    "דוחות מסודרים לביטוח, לוועד הבית ולחברת הניהול",
    "זמינות גבוהה לטיפול בתקלות ושחרור רכבים תקועים",
];
pub const HERO_NOTE: &str = "משאירים פרטים. חוזרים אליכם עם הצעה לתחזוקה שוטפת או טיפול חד־פעמי.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub icon_src: &'static str,
}

pub const MAINTENANCE_REASONS: &[Reason] = &[
    Reason {
        title: "בטיחות לפני הכול",
        lines: &[
            "בלאי בשרשראות, בוכנות, ברגים ומערכות בקרה יכול להוביל למצב מסוכן.",
            "ירידות לא מבוקרות, תקיעה של רכב או סיכון לנפילת רכב ומטען.",
        ],
        icon_src: "icons/security-configuration.png",
    },
    Reason {
        title: "חובה לעמוד בתקנים",
        lines: &[
            "מתקני חניה מכניים צריכים לעמוד בדרישות התקן הישראלי ת״י 5437 והנחיות משרד התחבורה לחניונים.",
            "תחזוקה מסודרת עם בודק מוסמך שומרת עליכם מול הרשויות, הביטוח וכל גורמי הפיקוח.",
        ],
        icon_src: "icons/list.png",
    },
    Reason {
        title: "מניעת תקלות יקרות",
        lines: &[
            "טיפול יזום במערכת ההידראולית, בחשמל ובמנגנוני הנעילה זול משמעותית מתיקון חירום.",
            "תחזוקה נכונה מצמצמת קריסות, השבתות ותיקונים גדולים בזמן הכי לא מתאים.",
        ],
        icon_src: "icons/bank-building.png",
    },
    Reason {
        title: "שקט מדיירים ומשתמשים",
        lines: &[
            "אף אחד לא אוהב להיתקע בשש בבוקר כשהוא ממהר לעבודה.",
            "תחזוקה נכונה מפחיתה עצבים, תלונות וטיפול במקרי קצה מול דיירים ומשתמשים.",
        ],
        icon_src: "icons/blue-heart.png",
    },
    Reason {
        title: "שמירה על ערך הנכס",
        lines: &[
            "חניון עם מתקנים עובדים, מתוחזקים ומתועדים משפר את ערך הדירות והנכס כולו.",
            "קל יותר להשכיר, למכור ולנהל נכס שבו החניה עובדת כמו שצריך ומגובה בדוחות תחזוקה מסודרים.",
        ],
        icon_src: "icons/money-bag.png",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceColumn {
    pub id: &'static str,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [&'static str],
}

pub const SERVICE_COLUMNS: &[ServiceColumn] = &[
    ServiceColumn {
        id: "standards",
        label: "עמידה בתקנים",
        subtitle: "בטיחות, תקינה ותיעוד",
        items: &[
            "תחזוקה על פי דרישות התקן הישראלי ת\"י 5437 למתקני חניה מכניים",
            "תחזוקה למערכות של פרומוט מתקני חניה ויצרנים נוספים",
            "הכנת המתקן לבדיקה על ידי בודק מוסמך או מהנדס בטיחות",
            "דוחות ביקורת מסודרים לאחר כל ביקור, עם ממצאים, תמונות והמלצות",
            "ליווי מול חברות הביטוח והגורמים המקצועיים כשצריך",
        ],
    },
    ServiceColumn {
        id: "services",
        label: "השירותים שלנו",
        subtitle: "שירותי התחזוקה והטיפול",
        items: &[
            "ביקורות תקופתיות מתוכננות לכל המתקנים",
            "טיפולים למערכות הידראוליות, שרשראות, בוכנות וחלקים נעים",
            "כיוון ויישור פלטפורמות ומפלסים",
            "טיפול בחשמל, גלאים, מפסקי גבול ולוחות בקרה",
            "תיקונים נקודתיים ותיקוני חירום",
            "שדרוג מערכות ישנות והחלפת רכיבים שהסתיים להם אורך החיים",
        ],
    },
    ServiceColumn {
        id: "who",
        label: "למי זה מתאים",
        subtitle: "לקוחות שאנחנו מלווים ביום יום",
        items: &[
            "בנייני מגורים עם מכפילי חניה או מתקנים טמונים",
            "חניונים של משרדים, מרכזים מסחריים ובנייני חברות",
            "יזמים וקבלנים בפרויקטים חדשים ותמ\"א 38 או פינוי בינוי",
            "חברות ניהול נכסים ווועדי בתים שמחפשים כתובת אחת לכל נושא תחזוקת החניה",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemKind {
    pub id: &'static str,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_src: &'static str,
}

pub const SYSTEM_KIND_NOTE: &str =
    "מתלבטים איזה מתקן יש אצלכם? שלחו לנו תמונה או תכנית ואנחנו נכוון אתכם.";

pub const SYSTEM_KINDS: &[SystemKind] = &[
    SystemKind {
        id: "mechanical",
        label: "מתקנים מכניים",
        title: "מכפילי חניה ומערכות מכניות",
        description: "מכפילי חניה תלויים, קונזוליים, מתקנים טמונים ומערכות מבוססות שרשראות. טיפול שוטף בשרשראות, בצירים, במיסבים, בעיגונים ובמערכות האיזון.",
        image_src: "images/installations/mechanical.jpg",
    },
    SystemKind {
        id: "hydraulic",
        label: "מתקנים הידראוליים טמונים",
        title: "מערכות עם בוכנות מתחת למפלס הקרקע",
        description: "מערכות שמבוססות על בוכנות הידראוליות ותאי משאבה מתחת למפלס החניה. בדיקות לחץ, אטמים, שמנים, מנגנוני בטיחות ותעלות ניקוז כדי לשמור על עבודה רציפה.",
        image_src: "images/installations/hydraulic.jpg",
    },
    SystemKind {
        id: "semi-auto",
        label: "מערכות חצי אוטומטיות",
        title: "פאזל ומערכות חניה מודולריות",
        description: "מערכות שבהן הרכבים נעים אופקית ואנכית על גבי מסילות ושרשראות. דגש על כיול חיישנים, מנועים, עצירות קצה ומערכות הבקרה שמנהלות את כל התנועה.",
        image_src: "images/installations/semi-auto.jpg",
    },
    SystemKind {
        id: "robotic",
        label: "מערכות אוטומטיות ורובוטיות",
        title: "קרוסלות, מגדלי חניה וכוורות רובוטיות",
        description: "חניוני קרוסלה, מגדלי חניה ומערכות רובוטיות מלאות. תחזוקה לממשקי הנעה, בקרה, בטיחות ואינטגרציה למערכות ניהול החניון ומערכות הבניין.",
        image_src: "images/installations/robotic.jpg",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceBlock {
    pub id: &'static str,
    pub title: &'static str,
    pub kicker: &'static str,
    pub tags: &'static [&'static str],
    pub paragraphs: &'static [&'static str],
}

pub const SERVICE_BLOCKS: &[ServiceBlock] = &[
    ServiceBlock {
        id: "planned-maintenance",
        title: "תחזוקה שוטפת ומתוכננת",
        kicker: "תוכנית תחזוקה מסודרת שמותאמת למתקנים, לעומסים ולשימוש היומיומי.",
        tags: &["תוכנית שנתית / רבעונית", "ביקורות קבועות", "דוחות מסודרים"],
        paragraphs: &[
            "אנחנו בונים יחד איתכם תוכנית תחזוקה שנתית או רבעונית, שמותאמת לסוג המתקנים, כמות הרכבים והאופי של החניון. לכל ביקור יש צ'ק־ליסט מסודר, כך ששום פריט חשוב לא נשאר מאחור.",
            "אחרי כל ביקורת אתם מקבלים סיכום ברור – עם תמונות, סטטוס של כל מתקן והמלצות להמשך טיפול. בנוסף, אנחנו שומרים היסטוריית טיפולים לכל מתקן, כדי שתמיד תוכלו לדעת מה נעשה ומתי.",
        ],
    },
    ServiceBlock {
        id: "repairs",
        title: "תיקונים ותקלות",
        kicker: "כשהמתקן לא עובד – יש מי שמגיע, מאבחן ומחזיר אותו לעבודה בצורה בטוחה.",
        tags: &["טיפול חירום", "שחרור רכבים תקועים", "החלפת חלקים"],
        paragraphs: &[
            "כשמתקן החניה לא עולה, לא יורד או פשוט מסרב להגיב – אנחנו נכנסים לפעולה. הטכנאים שלנו יודעים לשחרר רכבים תקועים בצורה בטוחה, לאבחן במהירות את מקור התקלה ולהחליף את החלקים הבעייתיים.",
            "במקום “לחכות שזה יקרוס”, אנחנו מחזירים גם מתקנים ותיקים לעבודה תקינה, ובמקרים רבים חוסכים את הצורך בהחלפה מלאה של המערכת.",
        ],
    },
    ServiceBlock {
        id: "safety",
        title: "הכנה לבדיקות ובטיחות",
        kicker: "דואגים שהמתקנים יהיו מוכנים לבדיקות, לעמידה בתקן ולדרישות גורמי הפיקוח.",
        tags: &["הכנה לבודק מוסמך", "טיפול בליקויים", "בדיקות יזומות"],
        paragraphs: &[
            "אנחנו מכינים את המתקנים לבדיקות של בודק מוסמך או מהנדס בטיחות, כדי שיגיעו לבדיקה כשהכול מדויק ומוכן. ליקויים שעלו בביקורות קודמות מטופלים מראש, יחד עם התאמה לדרישות התקן והיצרן.",
            "בנוסף, ניתן לבצע בדיקות בטיחות יזומות בהתאם להנחיות הגופים הרלוונטיים. המטרה: שלא תופתעו בבדיקה, ולא תישארו עם מתקן שלא עומד בדרישות.",
        ],
    },
    ServiceBlock {
        id: "upgrades",
        title: "שדרוגים ושיפורים",
        kicker: "מערכות ותיקות יכולות לעבוד כמו חדשות – עם שדרוגים נכונים במקום החלפה מלאה.",
        tags: &["שדרוג בקרה", "חוויית משתמש", "התאמה לעומסים חדשים"],
        paragraphs: &[
            "במקום להחליף את כל המערכת, אפשר לעדכן רק את מה שבאמת צריך. אנחנו משדרגים מערכות בקרה ישנות לדגמים חדשים ונוחים יותר, משפרים את חוויית המשתמש באמצעות שילוט, תאורה ולחצני הפעלה ברורים.",
            "במידת הצורך, המערכת מותאמת לשינויים בשימוש – יותר רכבים, כניסה של רכבי SUV וחשמליים, או שינוי אופי החניון. השדרוגים האלו מאריכים את חיי המתקן ומפחיתים תקלות קדימה.",
        ],
    },
    ServiceBlock {
        id: "projects",
        title: "ליווי מקצועי בפרויקטים חדשים",
        kicker: "משלב התכנון ועד יום המסירה – יש לכם כתובת אחת מקצועית למתקני החניה.",
        tags: &["ייעוץ תכנון", "תיאום בין גורמים", "העברה לתחזוקה שוטפת"],
        paragraphs: &[
            "אנחנו נכנסים לתמונה כבר בשלב התכנון: מסייעים לבחור את סוגי המתקנים שמתאימים למגרש, לתכנון האדריכלי ולצרכים העתידיים של הבניין או החניון.",
            "לאורך הדרך אנחנו מתאמים בין האדריכל, היזם וספק המתקנים, מלווים את ההרכבה וההרצה, ובסיום הפרויקט מעבירים את האתר למצב של תחזוקה שוטפת – עם נהלי עבודה והעברת מקל מסודרת.",
        ],
    },
    ServiceBlock {
        id: "training",
        title: "הדרכה ושגרות שימוש",
        kicker: "כשמשתמשים נכון במתקן – הוא עובד יותר טוב, ליותר זמן, עם פחות תקלות.",
        tags: &["הדרכת ועד / ניהול", "נהלי שימוש", "שילוט למשתמשים"],
        paragraphs: &[
            "אנחנו מדריכים את ועד הבית או חברת הניהול על שימוש נכון ובטוח במתקני החניה: מה מותר, מה אסור, ומה עושים כשמשהו מרגיש לא תקין.",
            "יחד בונים נהלי שימוש למשתמשים – כולל טיפים, 'עשה ואל תעשה' ונהלי חירום בסיסיים. אפשר לשלב גם שירות של עיצוב שילוט ברור לחניון, כדי שכל משתמש יבין איך להשתמש במערכת כבר בניסיון הראשון.",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductCategory {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Product],
}

pub const PRODUCT_CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        title: "מתקנים מכניים",
        subtitle: "מכפילי חניה ומתקנים טמונים",
        items: &[
            Product {
                label: "מכפילי חניה תלויים וקונזוליים",
                description: "מתקנים שמוסיפים מקום חניה אחד או שניים בתוך חניון קיים או בחוץ. אנחנו מטפלים בשרשראות, ברגים, פלטפורמות ומערכות בטיחות כדי שההרמה וההורדה יעבדו חלק ובצורה בטוחה.",
            },
            Product {
                label: "מתקנים טמונים מתחת לפני הקרקע",
                description: "מערכות שיכולות להכיל עד שלושה מפלסי חניה מתחת למפלס הרחוב. תחזוקה כוללת טיפול במנועים, שרשראות או בוכנות, ניקוז ואטימות כדי למנוע תקלות עקב רטיבות או הצפות.",
            },
        ],
    },
    ProductCategory {
        title: "מתקנים חצי אוטומטיים",
        subtitle: "מערכות פאזל מתקדמות",
        items: &[Product {
            label: "מערכות פאזל",
            description: "מערכות חניה שבהן הרכבים נעים על גבי מסילות במישור אופקי ואנכי, ומייצרות הרבה מקומות חניה בשטח קטן. אנחנו דואגים לכיול חיישנים, מנועים, מסילות ומערכת הבקרה כדי שהמערכת תישאר מדויקת ואמינה גם בעומסים גבוהים.",
        }],
    },
    ProductCategory {
        title: "מתקנים אוטומטיים ורובוטיים",
        subtitle: "חניוני קרוסלה, מגדל וכוורת",
        items: &[
            Product {
                label: "חניון קרוסלה רוטרי",
                description: "מערכת אנכית שבה הרכבים מסתדרים אחד מעל השני ומסתובבים כמו קרוסלה. התחזוקה מתמקדת במנועים, שרשראות, מנגנוני עצירה ומערכות בקרה כדי שהעלאה והורדה יהיו מדויקות ובטוחות.",
            },
            Product {
                label: "חניוני מגדל או כוורת רובוטית",
                description: "מערכות מתקדמות שמעבירות רכבים מהמעלית אל תאי חניה שונים. אנחנו מטפלים בממשקי המעלית, מסועים, מערכות בקרה וחיישני בטיחות כדי לשמור על רצף עבודה חלק ואמין.",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitledText {
    pub title: &'static str,
    pub text: &'static str,
}

pub const PROCESS_STEPS: &[TitledText] = &[
    TitledText {
        title: "מיפוי ובדיקה ראשונית",
        text: "טכנאי מגיע לאתר, עובר על כל המתקנים, בודק את מצבם ומפיק דוח פתיחה עם המלצות על תדירות הטיפולים הדרושה.",
    },
    TitledText {
        title: "בניית תוכנית תחזוקה",
        text: "ביחד איתכם נבנית תוכנית ביקורות שנתית או רבעונית לפי סוג המתקנים, נפח השימוש ודרישות הביטוח והתקן.",
    },
    TitledText {
        title: "ביקורים תקופתיים קבועים",
        text: "בכל ביקור מבוצע צ'ק ליסט מסודר עם בדיקות מכניות, הידראוליות, חשמל, בקרה, עיגונים, ניקוז ועוד.",
    },
    TitledText {
        title: "דוחות וסיכום",
        text: "אחרי כל טיפול מתקבל דוח מסודר שמסביר מה בוצע, מה נמצא ומה מומלץ לטפל בו בהמשך אם נדרש.",
    },
    TitledText {
        title: "זמינות לתקלות בין הטיפולים",
        text: "לקוחות תחזוקה שוטפת נהנים מזמינות גבוהה יותר ומעדיפות בטיפול בתקלות פתאומיות לאורך השנה.",
    },
];

pub const MAINTENANCE_CHECKLIST: &[&str] = &[
    "בדיקת שרשראות או כבלים והידוק עיגונים.",
    "בדיקת בוכנות הידראוליות, מפלס שמן ואטימות.",
    "בדיקת מפסקי גבול, גלאי בטיחות ומערכות עצירה.",
    "שימון חלקים נעים לפי המלצות היצרן.",
    "בדיקת פילוס פלטפורמות והתאמת גבהים.",
    "בדיקת תעלות ניקוז, משאבות ובידוד מפני מים במתקנים טמונים.",
    "בדיקת לוחות חשמל והידוק חיבורים.",
];

pub const MAINTENANCE_BENEFITS: &[TitledText] = &[
    TitledText {
        title: "פחות תקלות חירום",
        text: "טיפול בבלאי לפני שהוא הופך לתקלה חוסך עצירות פתאומיות והשבתות מתמשכות של החניון.",
    },
    TitledText {
        title: "פחות עצבים ותלונות",
        text: "דיירים ומשתמשים חווים פחות עיכובים בדרך לעבודה ופחות הפתעות ביציאה או בכניסה לחניון.",
    },
    TitledText {
        title: "יותר בטיחות ושקט נפשי",
        text: "מתקן מתוחזק היטב מקטין סיכונים בטיחותיים ויוצר תחושת ביטחון אצל כל מי שנוסע עליו.",
    },
    TitledText {
        title: "עמידה קלה מול ביטוח ורשויות",
        text: "דוחות מסודרים ותיעוד טיפולים מקלים על התנהלות מול חברות ביטוח, בודקים מוסמכים וגופי פיקוח.",
    },
    TitledText {
        title: "תכנון עלויות במקום הפתעות",
        text: "תחזוקה שוטפת מאפשרת לתכנן תקציב מראש במקום להתמודד עם עלויות חירום גבוהות ולא מתוכננות.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Dark,
    Soft,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoBox {
    pub tone: Tone,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalDoc {
    pub section: LegalSection,
    pub title: &'static str,
    pub intro: &'static str,
    pub boxes: &'static [InfoBox],
}

pub const LEGAL_DOCS: &[LegalDoc] = &[
    LegalDoc {
        section: LegalSection::Privacy,
        title: "מדיניות פרטיות",
        intro: "מסמך זה מסביר כיצד אביב פתרונות חניה אוספת ומשתמשת במידע בעת שימוש באתר.",
        boxes: &[
            InfoBox {
                tone: Tone::Dark,
                title: "איזה מידע נאסף",
                lines: &[
                    "מידע שאתם מזינים בטפסים: שם, טלפון, אימייל (אופציונלי), עיר/כתובת, סוג מתקן ותוכן ההודעה.",
                    "מידע טכני בסיסי לתפעול ואבטחה: כתובת IP, סוג דפדפן, זמני גישה ושגיאות (ככל שנאסף).",
                    "אם יופעלו בעתיד כלי מדידה/פרסום, הם יעבדו מידע רק לאחר הסכמה בקוקיז.",
                ],
            },
            InfoBox {
                tone: Tone::Soft,
                title: "למה משתמשים במידע",
                lines: &[
                    "מענה לפניות, תיאום שירות וטיפול בתקלות.",
                    "שיפור השירות וחוויית המשתמש.",
                    "אבטחה ותפעול תקין של האתר.",
                ],
            },
            InfoBox {
                tone: Tone::Dark,
                title: "העברת מידע לצדדים שלישיים",
                lines: &[
                    "אם אתם בוחרים לשלוח פנייה דרך WhatsApp, תוכן ההודעה והפרטים עוברים ל־WhatsApp/Meta לצורך פתיחת שיחה.",
                    "ספקי תשתית (אחסון/CDN/אבטחה) עשויים לעבד מידע טכני לצורך תפעול והגנה.",
                ],
            },
        ],
    },
    LegalDoc {
        section: LegalSection::Cookies,
        title: "מדיניות קוקיז",
        intro: "האתר משתמש בעוגיות הכרחיות לתפעול ולשמירת העדפות. ניתן לבחור אם לאשר גם עוגיות אנליטיקס/שיווק דרך באנר הקוקיז.",
        boxes: &[
            InfoBox {
                tone: Tone::Soft,
                title: "הכרחיות",
                lines: &["תפעול בסיסי ושמירת העדפות."],
            },
            InfoBox {
                tone: Tone::Dark,
                title: "אנליטיקס",
                lines: &["מדידה ושיפור ביצועים (אם תאשרו)."],
            },
            InfoBox {
                tone: Tone::Soft,
                title: "שיווק",
                lines: &["מדידה/פרסום (אם תאשרו)."],
            },
        ],
    },
    LegalDoc {
        section: LegalSection::Terms,
        title: "תנאי שימוש",
        intro: "שימוש באתר מהווה הסכמה לתנאים אלו. האתר נועד להציג מידע וערוץ ליצירת קשר לגבי שירותי תחזוקה/תיקון/שדרוג מתקני חניה.",
        boxes: &[
            InfoBox {
                tone: Tone::Soft,
                title: "פניות דרך האתר",
                lines: &["שליחת פנייה אינה מהווה התחייבות לזמני הגעה או למחיר. תיאום וזמינות ייקבעו בשיחה מול אביב פתרונות חניה."],
            },
            InfoBox {
                tone: Tone::Dark,
                title: "אחריות",
                lines: &["התוכן באתר הוא מידע כללי. ייתכנו טעויות או שינויים. אביב פתרונות חניה אינה אחראית לנזק עקיף הנובע משימוש באתר."],
            },
            InfoBox {
                tone: Tone::Soft,
                title: "דין וסמכות שיפוט",
                lines: &["על תנאים אלו יחולו דיני מדינת ישראל."],
            },
        ],
    },
];

pub fn legal_doc(section: LegalSection) -> Option<&'static LegalDoc> {
    LEGAL_DOCS.iter().find(|doc| doc.section == section)
}
