//! Built-in locale data for date names, relative phrases and date styles.

use crate::debug;

/// CLDR plural categories used by the built-in locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    One,
    Few,
    Many,
    Other,
}

/// Forms of a time unit for each plural category.
#[derive(Debug)]
pub struct UnitNames {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
    pub other: &'static str,
}

impl UnitNames {
    const fn two(one: &'static str, other: &'static str) -> Self {
        UnitNames {
            one,
            few: other,
            many: other,
            other,
        }
    }

    pub fn get(&self, plural: Plural) -> &'static str {
        match plural {
            Plural::One => self.one,
            Plural::Few => self.few,
            Plural::Many => self.many,
            Plural::Other => self.other,
        }
    }
}

/// Units used by relative date strings, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl RelativeUnit {
    pub const ALL: [RelativeUnit; 7] = [
        RelativeUnit::Second,
        RelativeUnit::Minute,
        RelativeUnit::Hour,
        RelativeUnit::Day,
        RelativeUnit::Week,
        RelativeUnit::Month,
        RelativeUnit::Year,
    ];

    /// Length of the unit in seconds. Months are 30 days, years 365.
    pub fn seconds(&self) -> i64 {
        match self {
            RelativeUnit::Second => 1,
            RelativeUnit::Minute => 60,
            RelativeUnit::Hour => 3_600,
            RelativeUnit::Day => 86_400,
            RelativeUnit::Week => 7 * 86_400,
            RelativeUnit::Month => 30 * 86_400,
            RelativeUnit::Year => 365 * 86_400,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug)]
pub struct Locale {
    pub language: &'static str,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Monday first
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub am_pm: [&'static str; 2],
    pub now: &'static str,
    pub today: &'static str,
    pub yesterday: &'static str,
    /// `{}` is replaced by the count and unit
    pub past: &'static str,
    pub future: &'static str,
    pub units: [UnitNames; 7],
    /// Short, medium, long and full date patterns
    pub styles: [&'static str; 4],
    plural_rule: fn(u64) -> Plural,
}

impl Locale {
    pub fn plural(&self, count: u64) -> Plural {
        (self.plural_rule)(count)
    }

    pub fn unit_name(&self, unit: RelativeUnit, count: u64) -> &'static str {
        self.units[unit.index()].get(self.plural(count))
    }

    /// Resolves a locale identifier on its language prefix, so `fr`,
    /// `fr_FR` and `fr-CA` are all French. Unknown languages use English.
    pub fn resolve(identifier: &str) -> &'static Locale {
        let language = identifier
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match LOCALES.iter().find(|locale| locale.language == language) {
            Some(locale) => locale,
            None => {
                debug!("Unknown locale \"{}\", using English", identifier);
                &ENGLISH
            }
        }
    }
}

fn one_other(count: u64) -> Plural {
    if count == 1 {
        Plural::One
    } else {
        Plural::Other
    }
}

fn french(count: u64) -> Plural {
    if count <= 1 {
        Plural::One
    } else {
        Plural::Other
    }
}

fn slavic(count: u64) -> Plural {
    match (count % 10, count % 100) {
        (1, n) if n != 11 => Plural::One,
        (2..=4, n) if !(12..=14).contains(&n) => Plural::Few,
        _ => Plural::Many,
    }
}

pub static ENGLISH: Locale = Locale {
    language: "en",
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    am_pm: ["AM", "PM"],
    now: "now",
    today: "Today",
    yesterday: "Yesterday",
    past: "{} ago",
    future: "in {}",
    units: [
        UnitNames::two("second", "seconds"),
        UnitNames::two("minute", "minutes"),
        UnitNames::two("hour", "hours"),
        UnitNames::two("day", "days"),
        UnitNames::two("week", "weeks"),
        UnitNames::two("month", "months"),
        UnitNames::two("year", "years"),
    ],
    styles: ["M/d/yy", "MMM d, yyyy", "MMMM d, yyyy", "EEEE, MMMM d, yyyy"],
    plural_rule: one_other,
};

static FRENCH: Locale = Locale {
    language: "fr",
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
    weekdays_short: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
    am_pm: ["AM", "PM"],
    now: "maintenant",
    today: "Aujourd'hui",
    yesterday: "Hier",
    past: "il y a {}",
    future: "dans {}",
    units: [
        UnitNames::two("seconde", "secondes"),
        UnitNames::two("minute", "minutes"),
        UnitNames::two("heure", "heures"),
        UnitNames::two("jour", "jours"),
        UnitNames::two("semaine", "semaines"),
        UnitNames::two("mois", "mois"),
        UnitNames::two("an", "ans"),
    ],
    styles: ["dd/MM/yyyy", "d MMM yyyy", "d MMMM yyyy", "EEEE d MMMM yyyy"],
    plural_rule: french,
};

static GERMAN: Locale = Locale {
    language: "de",
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
    weekdays_short: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    am_pm: ["AM", "PM"],
    now: "jetzt",
    today: "Heute",
    yesterday: "Gestern",
    past: "vor {}",
    future: "in {}",
    // Dative forms, as used after "vor" and "in"
    units: [
        UnitNames::two("Sekunde", "Sekunden"),
        UnitNames::two("Minute", "Minuten"),
        UnitNames::two("Stunde", "Stunden"),
        UnitNames::two("Tag", "Tagen"),
        UnitNames::two("Woche", "Wochen"),
        UnitNames::two("Monat", "Monaten"),
        UnitNames::two("Jahr", "Jahren"),
    ],
    styles: ["dd.MM.yy", "dd.MM.yyyy", "d. MMMM yyyy", "EEEE, d. MMMM yyyy"],
    plural_rule: one_other,
};

static SPANISH: Locale = Locale {
    language: "es",
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
    weekdays_short: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    am_pm: ["a. m.", "p. m."],
    now: "ahora",
    today: "Hoy",
    yesterday: "Ayer",
    past: "hace {}",
    future: "dentro de {}",
    units: [
        UnitNames::two("segundo", "segundos"),
        UnitNames::two("minuto", "minutos"),
        UnitNames::two("hora", "horas"),
        UnitNames::two("día", "días"),
        UnitNames::two("semana", "semanas"),
        UnitNames::two("mes", "meses"),
        UnitNames::two("año", "años"),
    ],
    styles: [
        "d/M/yy",
        "d MMM yyyy",
        "d 'de' MMMM 'de' yyyy",
        "EEEE, d 'de' MMMM 'de' yyyy",
    ],
    plural_rule: one_other,
};

static RUSSIAN: Locale = Locale {
    language: "ru",
    // Genitive, as used in "15 января 2023"
    months: [
        "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
        "октября", "ноября", "декабря",
    ],
    months_short: [
        "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
        "дек.",
    ],
    weekdays: [
        "понедельник", "вторник", "среда", "четверг", "пятница", "суббота", "воскресенье",
    ],
    weekdays_short: ["пн", "вт", "ср", "чт", "пт", "сб", "вс"],
    am_pm: ["AM", "PM"],
    now: "сейчас",
    today: "Сегодня",
    yesterday: "Вчера",
    past: "{} назад",
    future: "через {}",
    units: [
        UnitNames {
            one: "секунду",
            few: "секунды",
            many: "секунд",
            other: "секунды",
        },
        UnitNames {
            one: "минуту",
            few: "минуты",
            many: "минут",
            other: "минуты",
        },
        UnitNames {
            one: "час",
            few: "часа",
            many: "часов",
            other: "часа",
        },
        UnitNames {
            one: "день",
            few: "дня",
            many: "дней",
            other: "дня",
        },
        UnitNames {
            one: "неделю",
            few: "недели",
            many: "недель",
            other: "недели",
        },
        UnitNames {
            one: "месяц",
            few: "месяца",
            many: "месяцев",
            other: "месяца",
        },
        UnitNames {
            one: "год",
            few: "года",
            many: "лет",
            other: "года",
        },
    ],
    styles: [
        "dd.MM.yyyy",
        "d MMM yyyy 'г'.",
        "d MMMM yyyy 'г'.",
        "EEEE, d MMMM yyyy 'г'.",
    ],
    plural_rule: slavic,
};

static LOCALES: [&Locale; 5] = [&ENGLISH, &FRENCH, &GERMAN, &SPANISH, &RUSSIAN];
