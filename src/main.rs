// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m::interrupt::{free, Mutex};
use cortex_m::peripheral::{syst::SystClkSource, NVIC};
use cortex_m_rt::{entry, exception};
use panic_halt as _;

use hal::{
    interrupt, pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use shutter::control::tick::{reload_for, tick};
use shutter::hw::{usart::COMMAND_BAUD, BoardPins, Buttons, CommandPort, RelayMotor};
use shutter::{Controller, SharedState};

const CONFIG: shutter::Config = match shutter::Config::DEFAULT.check() {
    Ok(config) => config,
    Err(_) => panic!("invalid shutter configuration"),
};

static SHARED: SharedState = SharedState::new(CONFIG);

static COMMAND_PORT: Mutex<RefCell<Option<CommandPort<pac::USART1>>>> =
    Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
    let motor = RelayMotor::new(pins.motor.enable, pins.motor.dir);
    let buttons = Buttons::new(pins.buttons.open, pins.buttons.close);

    // USART1 (commands)
    let usart_cfg = Config {
        baud_rate: COMMAND_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let port = CommandPort::new(serial);
    free(|cs| *COMMAND_PORT.borrow(cs).borrow_mut() = Some(port));

    // USART3 (trace)
    #[cfg(feature = "trace")]
    let mut sink = {
        use shutter::hw::{usart::TRACE_BAUD, Usart};
        use shutter::trace::WriteTrace;

        let trace_cfg = Config {
            baud_rate: TRACE_BAUD.bps(),
            ..Default::default()
        };
        let serial = Serial::new(
            dp.USART3,
            (pins.usart3.tx, pins.usart3.rx),
            &clocks,
            trace_cfg,
        );
        let mut usart = Usart::new(serial);
        usart.println("");
        usart.println("____ shutter trace ____");
        WriteTrace::new(usart)
    };
    #[cfg(not(feature = "trace"))]
    let mut sink = ();

    // SysTick at 1 kHz
    let mut syst = cp.SYST;
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(reload_for(clocks.sysclk().raw()));
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    unsafe { NVIC::unmask(pac::Interrupt::USART1) };

    let mut controller = Controller::new(&SHARED, motor, buttons);

    loop {
        controller.poll(&mut sink);
    }
}

#[exception]
fn SysTick() {
    tick(&SHARED);
}

#[interrupt]
fn USART1() {
    free(|cs| {
        if let Some(port) = COMMAND_PORT.borrow(cs).borrow_mut().as_mut() {
            port.service(&SHARED);
        }
    });
}
