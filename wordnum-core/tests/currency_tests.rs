//! Integration tests for currency amounts

use std::str::FromStr;

use wordnum_core::{converter, Decimal, Error, GenderGroup, Language, Options};

fn amount(language: Language, value: &str, currency: &str, options: &Options) -> String {
    converter(language)
        .unwrap()
        .currency_to_words(
            Decimal::from_str(value).unwrap(),
            currency,
            options,
            GenderGroup::None,
        )
        .unwrap()
}

#[test]
fn test_english_singular_and_plural() {
    let options = Options::default();
    assert_eq!(
        amount(Language::English, "1.01", "USD", &options),
        "one dollar one cent"
    );
    assert_eq!(
        amount(Language::English, "2.50", "USD", &options),
        "two dollars fifty cents"
    );
    assert_eq!(amount(Language::English, "5", "eur", &options), "five euros");
}

#[test]
fn test_zero_parts() {
    let options = Options::default();
    assert_eq!(
        amount(Language::English, "0.05", "USD", &options),
        "zero dollars five cents"
    );

    let options = Options {
        main_unit_zero_enabled: false,
        ..Options::default()
    };
    assert_eq!(amount(Language::English, "0.05", "USD", &options), "five cents");
    // Nothing else to say, so the main part stays
    assert_eq!(amount(Language::English, "0", "USD", &options), "zero dollars");

    let options = Options {
        sub_unit_zero_enabled: true,
        ..Options::default()
    };
    assert_eq!(
        amount(Language::English, "3", "USD", &options),
        "three dollars zero cents"
    );
}

#[test]
fn test_fraction_is_truncated() {
    let options = Options::default();
    assert_eq!(
        amount(Language::English, "1.999", "USD", &options),
        "one dollar ninety-nine cents"
    );
}

#[test]
fn test_upper_first_options() {
    let options = Options {
        main_unit_first_char_upper: true,
        sub_unit_first_char_upper: true,
        ..Options::default()
    };
    assert_eq!(
        amount(Language::English, "1.10", "EUR", &options),
        "One euro Ten cents"
    );
    assert_eq!(
        amount(Language::Turkish, "2.01", "TRY", &options),
        "İki Türk lirası Bir kuruş"
    );
}

#[test]
fn test_russian_three_forms_and_gender() {
    let options = Options::default();
    assert_eq!(
        amount(Language::Russian, "1.01", "RUB", &options),
        "один рубль одна копейка"
    );
    assert_eq!(
        amount(Language::Russian, "22.22", "RUB", &options),
        "двадцать два рубля двадцать две копейки"
    );
    assert_eq!(
        amount(Language::Russian, "5.11", "UAH", &options),
        "пять гривен одиннадцать копеек"
    );
}

#[test]
fn test_caller_gender_overrides_main_unit_only() {
    let russian = converter(Language::Russian).unwrap();
    let text = russian
        .currency_to_words(
            Decimal::from_str("1.01").unwrap(),
            "USD",
            &Options::default(),
            GenderGroup::Feminine,
        )
        .unwrap();
    assert_eq!(text, "одна доллар один цент");
}

#[test]
fn test_spanish_apocope_before_currency() {
    let options = Options::default();
    assert_eq!(
        amount(Language::Spanish, "21.01", "EUR", &options),
        "veintiún euros un céntimo"
    );
    assert_eq!(
        amount(Language::Spanish, "201", "UAH", &options),
        "doscientas una grivnas"
    );
}

#[test]
fn test_polish_and_bulgarian_currency() {
    let options = Options::default();
    assert_eq!(
        amount(Language::Polish, "22.05", "PLN", &options),
        "dwadzieścia dwa złote pięć groszy"
    );
    assert_eq!(
        amount(Language::Bulgarian, "2.21", "BGN", &options),
        "два лева двадесет и една стотинки"
    );
}

#[test]
fn test_unknown_currency_is_an_error() {
    let english = converter(Language::English).unwrap();
    let err = english
        .currency_to_words(Decimal::ONE, "XYZ", &Options::default(), GenderGroup::None)
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedCurrency {
            language: "English",
            currency: "XYZ".to_string(),
        }
    );
}

#[test]
fn test_negative_amount_is_an_error() {
    let english = converter(Language::English).unwrap();
    let err = english
        .currency_to_words(
            Decimal::from_str("-1.50").unwrap(),
            "USD",
            &Options::default(),
            GenderGroup::None,
        )
        .unwrap_err();
    assert!(matches!(err, Error::NegativeAmount(_)));
}

#[test]
fn test_twenty_one_agrees_with_currency_gender() {
    let options = Options::default();
    let cases = [
        (Language::Polish, "21", "EUR", "dwadzieścia jeden euro"),
        (Language::Polish, "21", "UAH", "dwadzieścia jeden hrywien"),
        (Language::Polish, "21", "PLN", "dwadzieścia jeden złotych"),
        (Language::Polish, "1", "UAH", "jedna hrywna"),
        (Language::Russian, "21", "RUB", "двадцать один рубль"),
        (Language::Russian, "21", "UAH", "двадцать одна гривна"),
        (Language::Bulgarian, "21", "EUR", "двадесет и едно евро"),
        (Language::Bulgarian, "1001", "BGN", "хиляда и един лева"),
        (Language::Spanish, "21", "USD", "veintiún dólares"),
    ];
    for (language, value, currency, expected) in cases {
        assert_eq!(
            amount(language, value, currency, &options),
            expected,
            "{language} {value} {currency}"
        );
    }
}

#[test]
fn test_round_millions_take_de() {
    let options = Options::default();
    assert_eq!(
        amount(Language::Spanish, "1000000", "EUR", &options),
        "un millón de euros"
    );
    assert_eq!(
        amount(Language::Spanish, "2000000", "USD", &options),
        "dos millones de dólares"
    );
    assert_eq!(
        amount(Language::French, "1000000", "EUR", &options),
        "un million d'euros"
    );
    assert_eq!(
        amount(Language::French, "2000000", "USD", &options),
        "deux millions de dollars"
    );
    assert_eq!(
        amount(Language::French, "1000100", "EUR", &options),
        "un million cent euros"
    );
}
